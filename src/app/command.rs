//! Line commands for the interactive shell.
//!
//! [`Command::parse`] turns one input line into a [`Command`]; [`execute`] runs it
//! against a [`Launcher`] and the optional current [`Session`], returning the
//! lines to print. Arguments are separated by whitespace; double quotes group
//! words, so `add-game "Counter Strike" steam://rungameid/730` works.

use crate::app::launcher::{Launcher, LoginOutcome};
use crate::app::session::Session;
use crate::domain::error::{LaunchdeckError, Result};
use crate::domain::{FilePayload, LaunchDraft, LaunchKind, MediaDraft, MediaKind};
use crate::protocols;
use crate::storage::Storage;
use std::path::PathBuf;

pub const HELP: &str = "\
commands:
  login <user> <password>
  logout
  whoami
  games
  files [document|image|video]
  add-game <name> <url> [link|local]
  upload-game <name> <path> [link|local]
  add-file <name> <url> <document|image|video> [inline]
  upload-file <path> [name] [document|image|video] [inline|no-inline]
  delete <id>
  users
  protocols [category]
  help
  quit";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    WhoAmI,
    Games,
    Files { kind: Option<MediaKind> },
    AddGame { name: String, url: String, kind: LaunchKind },
    UploadGame { name: String, path: PathBuf, kind: LaunchKind },
    AddFile { name: String, url: String, kind: MediaKind, inline: bool },
    UploadFile {
        path: PathBuf,
        name: Option<String>,
        kind: Option<MediaKind>,
        inline: Option<bool>,
    },
    Delete { id: String },
    Users,
    Protocols { category: Option<String> },
    Help,
    Quit,
}

impl Command {
    /// Parses a line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Validation`] for unknown commands, missing
    /// arguments or unknown kinds.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let tokens = tokenize(line)?;
        let Some((head, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match head.as_str() {
            "login" => {
                let [username, password] = exact::<2>(head, args)?;
                Self::Login { username, password }
            }
            "logout" => Self::Logout,
            "whoami" => Self::WhoAmI,
            "games" => Self::Games,
            "files" => Self::Files {
                kind: args.first().map(|k| k.parse::<MediaKind>()).transpose()?,
            },
            "add-game" => {
                let (name, url, kind) = name_target_kind(head, args)?;
                Self::AddGame { name, url, kind }
            }
            "upload-game" => {
                let (name, path, kind) = name_target_kind(head, args)?;
                Self::UploadGame {
                    name,
                    path: PathBuf::from(path),
                    kind,
                }
            }
            "add-file" => {
                if !(3..=4).contains(&args.len()) {
                    return Err(usage(head));
                }
                let inline = match args.get(3).map(String::as_str) {
                    None => false,
                    Some("inline") => true,
                    Some(_) => return Err(usage(head)),
                };
                Self::AddFile {
                    name: args[0].clone(),
                    url: args[1].clone(),
                    kind: args[2].parse::<MediaKind>()?,
                    inline,
                }
            }
            "upload-file" => {
                let Some((path, rest)) = args.split_first() else {
                    return Err(usage(head));
                };
                if rest.len() > 3 {
                    return Err(usage(head));
                }
                Self::UploadFile {
                    path: PathBuf::from(path),
                    name: rest.first().cloned(),
                    kind: rest.get(1).map(|k| k.parse::<MediaKind>()).transpose()?,
                    inline: rest.get(2).map(|flag| inline_flag(head, flag)).transpose()?,
                }
            }
            "delete" => {
                let [id] = exact::<1>(head, args)?;
                Self::Delete { id }
            }
            "users" => Self::Users,
            "protocols" => Self::Protocols {
                category: args.first().cloned(),
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(LaunchdeckError::Validation(format!(
                    "unknown command '{other}', try 'help'"
                )))
            }
        };

        Ok(Some(command))
    }
}

fn usage(command: &str) -> LaunchdeckError {
    LaunchdeckError::Validation(format!("wrong arguments for '{command}', try 'help'"))
}

fn inline_flag(command: &str, flag: &str) -> Result<bool> {
    match flag {
        "inline" => Ok(true),
        "no-inline" => Ok(false),
        _ => Err(usage(command)),
    }
}

fn exact<const N: usize>(command: &str, args: &[String]) -> Result<[String; N]> {
    <[String; N]>::try_from(args.to_vec()).map_err(|_| usage(command))
}

fn name_target_kind(command: &str, args: &[String]) -> Result<(String, String, LaunchKind)> {
    match args {
        [name, target] => Ok((name.clone(), target.clone(), LaunchKind::Link)),
        [name, target, kind] => Ok((name.clone(), target.clone(), kind.parse::<LaunchKind>()?)),
        _ => Err(usage(command)),
    }
}

fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(LaunchdeckError::Validation("unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn require_session(session: &mut Option<Session>) -> Result<&mut Session> {
    session
        .as_mut()
        .ok_or_else(|| LaunchdeckError::Validation("log in first".to_string()))
}

/// Runs one command and returns the lines to print.
///
/// [`Command::Quit`] produces no output; the caller decides when to stop.
///
/// # Errors
///
/// Propagates launcher errors and rejects collection commands without a session.
pub fn execute<S: Storage>(
    launcher: &mut Launcher<S>,
    session: &mut Option<Session>,
    command: Command,
) -> Result<Vec<String>> {
    let lines = match command {
        Command::Login { username, password } => {
            if let Some(previous) = session.take() {
                launcher.logout(previous)?;
            }
            let (next, outcome) = launcher.login(&username, &password)?;
            let line = match outcome {
                LoginOutcome::Authenticated => format!("welcome back, {username}"),
                LoginOutcome::Registered => format!("registered new user {username}"),
            };
            *session = Some(next);
            vec![line]
        }
        Command::Logout => match session.take() {
            Some(current) => {
                launcher.logout(current)?;
                vec!["logged out".to_string()]
            }
            None => vec!["not logged in".to_string()],
        },
        Command::WhoAmI => vec![session
            .as_ref()
            .map_or_else(|| "not logged in".to_string(), |s| s.username().to_string())],
        Command::Games => require_session(session)?
            .games()
            .iter()
            .map(|g| {
                let url = if g.is_embedded_file { "<embedded file>" } else { g.url.as_str() };
                format!("{}  {}  [{}]  {}", g.id, g.name, g.kind, url)
            })
            .collect(),
        Command::Files { kind } => {
            let current = require_session(session)?;
            let files: Vec<_> = match kind {
                Some(kind) => current.media_by_kind(kind),
                None => current.files().iter().collect(),
            };
            files
                .into_iter()
                .map(|f| {
                    let inline = if f.can_view_inline() { " (inline)" } else { "" };
                    format!("{}  {}  [{}]{}", f.id, f.name, f.kind, inline)
                })
                .collect()
        }
        Command::AddGame { name, url, kind } => {
            let current = require_session(session)?;
            let entry = launcher.add_launch_entry(current, LaunchDraft::link(name, url, kind))?;
            vec![format!("added {} ({})", entry.name, entry.id)]
        }
        Command::UploadGame { name, path, kind } => {
            let current = require_session(session)?;
            let file = FilePayload::read(&path)?;
            let entry = launcher.add_launch_entry(current, LaunchDraft::upload(name, file, kind))?;
            vec![format!("uploaded {} ({})", entry.name, entry.id)]
        }
        Command::AddFile { name, url, kind, inline } => {
            let current = require_session(session)?;
            let entry = launcher.add_media_entry(current, MediaDraft::link(name, url, kind, inline))?;
            vec![format!("added {} ({})", entry.name, entry.id)]
        }
        Command::UploadFile {
            path,
            name,
            kind,
            inline,
        } => {
            let current = require_session(session)?;
            let file = FilePayload::read(&path)?;
            let mut draft = MediaDraft::upload(name.unwrap_or_default(), file);
            if let Some(kind) = kind {
                draft.kind = kind;
                draft.viewable_inline = kind.is_visual();
            }
            if let Some(inline) = inline {
                draft.viewable_inline = inline;
            }
            let entry = launcher.add_media_entry(current, draft)?;
            vec![format!("uploaded {} as {} ({})", entry.name, entry.kind, entry.id)]
        }
        Command::Delete { id } => {
            let current = require_session(session)?;
            if launcher.delete_entry(current, &id)? {
                vec![format!("deleted {id}")]
            } else {
                vec![format!("no entry {id}")]
            }
        }
        Command::Users => launcher.users()?,
        Command::Protocols { category } => protocols::by_category(category.as_deref().unwrap_or("all"))
            .map(|p| format!("{:<16} {:<28} {}", p.name, p.protocol, p.description))
            .collect(),
        Command::Help => HELP.lines().map(String::from).collect(),
        Command::Quit => Vec::new(),
    };

    Ok(lines)
}
