use std::fmt;

/// A command-line flag that takes part in argument validation.
///
/// `Display` renders the short and long spellings the way they appear in
/// error messages, e.g. `-m|--manifest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Cve,
    Experimental,
    File,
    List,
    Manifest,
    Nagios,
    Priority,
    Reuse,
    Silent,
    Test,
    Updates,
    Verbose,
}

impl Flag {
    pub fn short(self) -> char {
        match self {
            Flag::Cve => 'c',
            Flag::Experimental => 'x',
            Flag::File => 'f',
            Flag::List => 'l',
            Flag::Manifest => 'm',
            Flag::Nagios => 'n',
            Flag::Priority => 'p',
            Flag::Reuse => 'r',
            Flag::Silent => 's',
            Flag::Test => 't',
            Flag::Updates => 'u',
            Flag::Verbose => 'v',
        }
    }

    pub fn long(self) -> &'static str {
        match self {
            Flag::Cve => "cve",
            Flag::Experimental => "experimental",
            Flag::File => "file",
            Flag::List => "list",
            Flag::Manifest => "manifest",
            Flag::Nagios => "nagios",
            Flag::Priority => "priority",
            Flag::Reuse => "reuse",
            Flag::Silent => "silent",
            Flag::Test => "test",
            Flag::Updates => "updates",
            Flag::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}|--{}", self.short(), self.long())
    }
}
