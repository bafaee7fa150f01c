//! Console output abstraction so the ping report can be captured in tests.
use std::cell::RefCell;

pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub trait Printer {
    fn clear(&self);
    fn print(&self, output: &str);
    fn eprint(&self, output: &str);
    fn println(&self, output: &str);
    fn eprintln(&self, output: &str);
}

/// Printer writing to the real stdout and stderr.
#[derive(Default)]
pub struct Console {}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Printer for Console {
    fn clear(&self) {
        self.print(CLEAR_SCREEN);
    }

    fn print(&self, output: &str) {
        print!("{output}");
    }

    fn eprint(&self, output: &str) {
        eprint!("{output}");
    }

    fn println(&self, output: &str) {
        println!("{output}");
    }

    fn eprintln(&self, output: &str) {
        eprintln!("{output}");
    }
}

/// Printer accumulating all output into a buffer, for assertions in tests.
#[derive(Default)]
pub struct Logger {
    output: RefCell<String>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
        }
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }
}

impl Printer for Logger {
    fn clear(&self) {
        self.print(CLEAR_SCREEN);
    }

    fn print(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn eprint(&self, output: &str) {
        self.print(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{output}\n"));
    }
}
