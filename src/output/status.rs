use std::fmt;
use std::process::exit;

/// Final state of a run, printed as the last output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Spanning,
    Disconnected,
    Inconsistent,
    InputError,
    OSError,
}

impl Status {
    /// Only a verified spanning tree exits with 0.
    pub(crate) fn code(self) -> i32 {
        match self {
            Self::Spanning => 0,
            _ => 1,
        }
    }

    pub(crate) fn report(self) -> ! {
        println!("% status {}", self);
        exit(self.code())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_codes() {
        assert_eq!(Status::Spanning.to_string(), "Spanning");
        assert_eq!(Status::OSError.to_string(), "OSError");
        assert_eq!(Status::Spanning.code(), 0);
        assert_eq!(Status::Disconnected.code(), 1);
        assert_eq!(Status::InputError.code(), 1);
    }
}
