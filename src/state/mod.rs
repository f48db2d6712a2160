// Page-behavior state.
// Each module mirrors one interaction of the portfolio document.

pub mod console;
pub mod contact;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod toast;

pub use console::{ConsoleLevel, ConsoleLog, ConsoleMessage};
pub use contact::CopyFlow;
pub use nav::{NavSpy, ScrollAnimation, Section};
pub use projects::{CardSource, LoadingState, ProjectCard, ProjectsState};
pub use reveal::RevealTracker;
pub use toast::Toast;
