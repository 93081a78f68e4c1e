use catalog_core::{Msg, SortKey, UnknownSortKey};

pub const HELP: &str = "\
commands:
  genres            list every genre with its id
  open <genre-id>   open a genre
  home | close      back to the home screen
  more              load the next page (scrolled near the end)
  sort <key>        none, title-asc, title-desc, year-asc, year-desc, rating-asc, rating-desc
  touch | release   press / release the highlights carousel
  swipe <index>     settle the carousel on an index
  help              show this text
  quit              exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Sort(#[from] UnknownSortKey),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let msg = match verb.to_ascii_lowercase().as_str() {
        "open" => {
            let category_id = argument
                .and_then(|raw| raw.parse().ok())
                .ok_or(InputError::Usage("open <genre-id>"))?;
            Msg::CategorySelected {
                category_id,
                name: None,
            }
        }
        "genres" | "g" => Msg::GenresRequested,
        "home" | "close" | "back" => Msg::CategoryClosed,
        "more" | "next" => Msg::LoadMoreRequested,
        "sort" => {
            let raw = argument.ok_or(InputError::Usage("sort <key>"))?;
            Msg::SortChanged(raw.parse::<SortKey>()?)
        }
        "touch" => Msg::CarouselInteractionStarted,
        "release" => Msg::CarouselInteractionEnded,
        "swipe" => {
            let index = argument
                .and_then(|raw| raw.parse().ok())
                .ok_or(InputError::Usage("swipe <index>"))?;
            Msg::CarouselSettled { index }
        }
        "quit" | "exit" | "q" => Msg::QuitRequested,
        "help" | "?" => return Ok(Some(Command::Help)),
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(Command::Dispatch(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatched(line: &str) -> Msg {
        match parse_command(line) {
            Ok(Some(Command::Dispatch(msg))) => msg,
            other => panic!("{line:?} parsed to {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn open_requires_numeric_id() {
        assert_eq!(
            dispatched("open 28"),
            Msg::CategorySelected {
                category_id: 28,
                name: None
            }
        );
        assert_eq!(
            parse_command("open action"),
            Err(InputError::Usage("open <genre-id>"))
        );
    }

    #[test]
    fn sort_parses_key_names() {
        assert_eq!(dispatched("SORT year-desc"), Msg::SortChanged(SortKey::YearDesc));
        assert_eq!(
            parse_command("sort random"),
            Err(InputError::Sort(UnknownSortKey("random".into())))
        );
    }

    #[test]
    fn navigation_and_carousel_words() {
        assert_eq!(dispatched("genres"), Msg::GenresRequested);
        assert_eq!(dispatched("more"), Msg::LoadMoreRequested);
        assert_eq!(dispatched("home"), Msg::CategoryClosed);
        assert_eq!(dispatched("touch"), Msg::CarouselInteractionStarted);
        assert_eq!(dispatched("release"), Msg::CarouselInteractionEnded);
        assert_eq!(dispatched("swipe 3"), Msg::CarouselSettled { index: 3 });
        assert_eq!(dispatched("q"), Msg::QuitRequested);
        assert_eq!(parse_command("help"), Ok(Some(Command::Help)));
        assert_eq!(
            parse_command("dance"),
            Err(InputError::Unknown("dance".into()))
        );
    }
}
