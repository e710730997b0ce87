use clap::{Arg, ArgAction, Command};

pub fn arg_parser() -> Command {
    Command::new("bookview")
        .about("Book detail pages for a review service")
        .subcommand_required(true)
        .subcommand(
            Command::new("show")
                .about("Load a book's page and print it")
                .arg(
                    Arg::new("location")
                        .required(true)
                        .help("Book id, path (/book/42) or url (http://host/book?id=42)"),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .action(ArgAction::SetTrue)
                        .help("Print the page as html instead"),
                ),
        )
        .subcommand(Command::new("list").about("List all books"))
        .subcommand(
            Command::new("serve")
                .about("Serve rendered pages over http")
                .arg(
                    Arg::new("listen")
                        .long("listen")
                        .help("Address to listen on, overrides listen_addr"),
                )
                .arg(
                    Arg::new("configured-token")
                        .long("configured-token")
                        .action(ArgAction::SetTrue)
                        .help(
                            "Use the configured token for visitors that send none; \
                             every such visitor then sees your own review",
                        ),
                ),
        )
        .subcommand(Command::new("browse").about("Launch a read eval print loop over locations"))
        .subcommand(Command::new("config").about("Print the default configuration"))
}

pub fn repl_commands() -> Vec<String> {
    let mut commands = vec!["exit".to_string(), "reload".to_string(), "/book/".to_string()];
    commands.sort();
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_consistent() {
        arg_parser().debug_assert();
    }

    #[test]
    fn show_takes_location() {
        let matches = arg_parser()
            .try_get_matches_from(["bookview", "show", "/book/1", "--html"])
            .unwrap();
        let (name, matches) = matches.subcommand().unwrap();
        assert_eq!(name, "show");
        assert_eq!(matches.get_one::<String>("location").unwrap(), "/book/1");
        assert!(matches.get_flag("html"));
    }

    #[test]
    fn serve_does_not_lend_configured_token_by_default() {
        let matches = arg_parser()
            .try_get_matches_from(["bookview", "serve"])
            .unwrap();
        let (_, matches) = matches.subcommand().unwrap();
        assert!(!matches.get_flag("configured-token"));

        let matches = arg_parser()
            .try_get_matches_from(["bookview", "serve", "--configured-token"])
            .unwrap();
        let (_, matches) = matches.subcommand().unwrap();
        assert!(matches.get_flag("configured-token"));
    }
}
