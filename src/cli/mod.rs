//! Command line handling
//!
//! bypassh has to accept anything ssh accepts, so arguments are not parsed.
//! Only the first argument is inspected for the few flags bypassh answers
//! itself; everything else goes to ssh as-is.

pub mod forward;
pub mod help;
pub mod print_config;
pub mod version;

use std::ffi::OsString;

/// What a command line asks bypassh to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `-V`: answer the OpenSSH version probe without starting WSL
    Version,
    /// `-h` / `--help`
    Help,
    /// `-P`: print the effective configuration
    PrintConfig,
    /// Anything else, forwarded to ssh after path translation
    Forward(Vec<OsString>),
}

impl Invocation {
    /// Classify the arguments that follow the program name
    pub fn from_args(args: Vec<OsString>) -> Self {
        match args.first().and_then(|arg| arg.to_str()) {
            Some("-V") => Self::Version,
            Some("-h" | "--help") => Self::Help,
            Some("-P") => Self::PrintConfig,
            _ => Self::Forward(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_own_flags() {
        assert_eq!(Invocation::from_args(args(&["-V"])), Invocation::Version);
        assert_eq!(Invocation::from_args(args(&["-h"])), Invocation::Help);
        assert_eq!(Invocation::from_args(args(&["--help"])), Invocation::Help);
        assert_eq!(Invocation::from_args(args(&["-P"])), Invocation::PrintConfig);
    }

    #[test]
    fn test_own_flags_only_in_first_position() {
        let list = args(&["host", "-V"]);
        assert_eq!(Invocation::from_args(list.clone()), Invocation::Forward(list));

        let list = args(&["-T", "-P", "host"]);
        assert_eq!(Invocation::from_args(list.clone()), Invocation::Forward(list));
    }

    #[test]
    fn test_forward_keeps_everything() {
        let list = args(&["-v", "--", "host", "ls -la"]);
        assert_eq!(Invocation::from_args(list.clone()), Invocation::Forward(list));
    }

    #[test]
    fn test_no_args_is_forwarded() {
        assert_eq!(Invocation::from_args(Vec::new()), Invocation::Forward(Vec::new()));
    }
}
