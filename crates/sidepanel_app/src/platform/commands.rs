use sidepanel_core::Msg;
use sidepanel_host::ViewportEvent;

pub const HELP: &str = "\
commands:
  type <text>            edit the address bar
  go                     submit the address bar
  open <url>             open a URL as-is
  loaded <url> [title]   viewport finished loading
  click <href> [blank]   link clicked in the page (blank = new tab intent)
  bookmark add           bookmark the current page
  bookmark remove <id>   remove a bookmark
  bookmark open <url>    open a bookmark
  bookmark list          list saved bookmarks
  drawer open|close      show or hide the bookmark drawer
  tree                   print the browser bookmark tree
  settings open|close|save
  homepage <text>        edit the homepage draft
  theme                  cycle the color theme
  state                  print the current state
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Viewport(ViewportEvent),
    /// Page finished loading with a known title.
    Loaded { url: String, title: Option<String> },
    AddBookmark,
    ListBookmarks,
    PrintTree,
    PrintState,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match word {
        "type" => Command::Dispatch(Msg::AddressInputChanged(rest.to_string())),
        "go" => Command::Dispatch(Msg::NavigationSubmitted),
        "open" => Command::Dispatch(Msg::OpenUrl(required(rest, "open <url>")?)),
        "loaded" => {
            let (url, title) = rest.split_once(' ').unwrap_or((rest, ""));
            let title = title.trim();
            Command::Loaded {
                url: required(url, "loaded <url> [title]")?,
                title: (!title.is_empty()).then(|| title.to_string()),
            }
        }
        "click" => {
            let (href, flag) = rest.split_once(' ').unwrap_or((rest, ""));
            Command::Viewport(ViewportEvent::AnchorClicked {
                href: href.to_string(),
                opens_new_context: flag.trim() == "blank",
            })
        }
        "bookmark" => parse_bookmark(rest)?,
        "drawer" => match rest {
            "open" => Command::Dispatch(Msg::BookmarkDrawerOpened),
            "close" => Command::Dispatch(Msg::BookmarkDrawerClosed),
            _ => return Err("usage: drawer open|close".to_string()),
        },
        "tree" => Command::PrintTree,
        "settings" => match rest {
            "open" => Command::Dispatch(Msg::SettingsOpened),
            "close" => Command::Dispatch(Msg::SettingsClosed),
            "save" => Command::Dispatch(Msg::SettingsSaved),
            _ => return Err("usage: settings open|close|save".to_string()),
        },
        "homepage" => Command::Dispatch(Msg::HomepageDraftChanged(rest.to_string())),
        "theme" => Command::Dispatch(Msg::ThemeToggled),
        "state" => Command::PrintState,
        "help" | "" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(command)
}

fn parse_bookmark(rest: &str) -> Result<Command, String> {
    let (action, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    let arg = arg.trim();
    match action {
        "add" => Ok(Command::AddBookmark),
        "list" => Ok(Command::ListBookmarks),
        "remove" => Ok(Command::Dispatch(Msg::RemoveBookmark {
            id: required(arg, "bookmark remove <id>")?,
        })),
        "open" => Ok(Command::Dispatch(Msg::OpenBookmark {
            url: required(arg, "bookmark open <url>")?,
        })),
        _ => Err("usage: bookmark add|remove <id>|open <url>|list".to_string()),
    }
}

fn required(value: &str, usage: &str) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("usage: {usage}"))
    } else {
        Ok(value.to_string())
    }
}
