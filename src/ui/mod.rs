pub mod chrome;
pub mod console;

pub use chrome::Chrome;
pub use console::Console;
