//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: gw2link [CHAT_CODE]
       gw2link --decode <TEXT>...

Inspect and edit Guild Wars 2 chat codes.

Arguments:
  [CHAT_CODE]        Chat code to open, e.g. [&AgGqtgAA] (a leading / and
                     percent-encoding are accepted)

Options:
  -d, --decode       Decode every chat code in TEXT and print JSON
  -h, --help         Print this help
  -V, --version      Print version

Environment:
  GW2LINK_API_URL, GW2LINK_LANG, GW2LINK_SITE_URL, GW2LINK_TIMEOUT_SECS,
  GW2LINK_ICON_CACHE_BYTES, GW2LINK_LOG
";

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("gw2link {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    print!("{}", USAGE);
    std::process::exit(0)
}
