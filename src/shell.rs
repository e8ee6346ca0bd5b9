//! Line-oriented command shell driving the navigation controller.
//!
//! One command per line; a command is one user event (tap, form submit,
//! deep link). Parse errors and rejected navigation are reported and the
//! session continues.
//!
//! ```text
//! login customer@dogclub.test woofwoof
//! select 250
//! back
//! show html
//! ```

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::data::Catalog;
use crate::nav::{NavError, NavigationController, Page, PageRegistry, SelectionPatch};
use crate::session::{Authenticator, Credentials, Role};
use crate::ui::{self, RenderMode};

pub const HELP: &str = "\
Session:
  login <email> <password>     log in (or submit the open signup form)
  logout
  signup [customer|club|teacher]
  auth-back
Navigation:
  go <page>                    navigate by page id
  open <page> key=value...     navigate with entity fields
                               keys: club channel name post event booking
                                     teacher dog seats price
  select <id>                  open a home feed entry (200-299 = event)
  back
  book <club> [teacher]
  confirm
  channel <club> <id> <name>
  forum <club> <id> <name>
  dog <id>
  teacher <club> <id>
Rating:
  rate <booking>
  rate-accept
  rate-submit <1-5>
  rate-dismiss
Club:
  pay-complete
Other:
  show [summary|html]
  state
  help
  quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: invalid {argument}: {value:?}")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },
}

/// A parsed shell command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Signup(Option<Role>),
    AuthBack,
    Go(String),
    Open { page: String, patch: SelectionPatch },
    Select(u32),
    Back,
    Book { club_id: u32, teacher_id: Option<u32> },
    Confirm,
    Channel { club_id: u32, channel_id: u32, name: String },
    Forum { club_id: u32, channel_id: u32, name: String },
    Dog(u32),
    Teacher { club_id: u32, teacher_id: u32 },
    Rate(u32),
    RateAccept,
    RateSubmit(u8),
    RateDismiss,
    PayComplete,
    Show(Option<RenderMode>),
    State,
    Help,
    Quit,
}

fn required<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    args.next()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn number<T: std::str::FromStr>(
    raw: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<T, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        argument,
        value: raw.to_string(),
    })
}

fn channel_args<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(u32, u32, String), CommandError> {
    let club_id = number(required(args, command, "club")?, command, "club")?;
    let channel_id = number(required(args, command, "id")?, command, "id")?;
    let name = args.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "name",
        });
    }
    Ok((club_id, channel_id, name))
}

fn patch_args<'a>(args: impl Iterator<Item = &'a str>) -> Result<SelectionPatch, CommandError> {
    const CMD: &str = "open";
    let mut patch = SelectionPatch::new();
    let mut channel: Option<u32> = None;
    let mut name: Option<String> = None;
    let mut seats: Option<u32> = None;
    let mut price: Option<u32> = None;

    for arg in args {
        let (key, value) = arg.split_once('=').ok_or_else(|| CommandError::InvalidArgument {
            command: CMD,
            argument: "key=value",
            value: arg.to_string(),
        })?;
        match key {
            "club" => patch = patch.club(number(value, CMD, "club")?),
            "post" => patch = patch.post(number(value, CMD, "post")?),
            "event" => patch = patch.event(number(value, CMD, "event")?),
            "booking" => patch = patch.booking(number(value, CMD, "booking")?),
            "teacher" => patch = patch.teacher(number(value, CMD, "teacher")?),
            "dog" => patch = patch.dog(number(value, CMD, "dog")?),
            "channel" => channel = Some(number(value, CMD, "channel")?),
            "name" => name = Some(value.replace('_', " ")),
            "seats" => seats = Some(number(value, CMD, "seats")?),
            "price" => price = Some(number(value, CMD, "price")?),
            other => {
                return Err(CommandError::InvalidArgument {
                    command: CMD,
                    argument: "key",
                    value: other.to_string(),
                })
            }
        }
    }

    if let Some(id) = channel {
        let name = name.unwrap_or_else(|| format!("#{}", id));
        patch = patch.channel(id, name);
    }
    match (seats, price) {
        (Some(count), Some(price)) => patch = patch.teachers_pricing(count, price),
        (None, None) => {}
        (Some(_), None) => {
            return Err(CommandError::MissingArgument {
                command: CMD,
                argument: "price",
            })
        }
        (None, Some(_)) => {
            return Err(CommandError::MissingArgument {
                command: CMD,
                argument: "seats",
            })
        }
    }
    Ok(patch)
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut args = line.split_whitespace();
        let name = args.next().unwrap_or_default();

        let command = match name {
            "login" => Command::Login {
                email: required(&mut args, "login", "email")?.to_string(),
                password: required(&mut args, "login", "password")?.to_string(),
            },
            "logout" => Command::Logout,
            "signup" => match args.next() {
                None => Command::Signup(None),
                Some(raw) => Command::Signup(Some(Role::parse(raw).ok_or_else(|| {
                    CommandError::InvalidArgument {
                        command: "signup",
                        argument: "role",
                        value: raw.to_string(),
                    }
                })?)),
            },
            "auth-back" => Command::AuthBack,
            "go" => Command::Go(required(&mut args, "go", "page")?.to_string()),
            "open" => {
                let page = required(&mut args, "open", "page")?.to_string();
                Command::Open {
                    page,
                    patch: patch_args(args)?,
                }
            }
            "select" => Command::Select(number(required(&mut args, "select", "id")?, "select", "id")?),
            "back" => Command::Back,
            "book" => Command::Book {
                club_id: number(required(&mut args, "book", "club")?, "book", "club")?,
                teacher_id: args
                    .next()
                    .map(|raw| number(raw, "book", "teacher"))
                    .transpose()?,
            },
            "confirm" => Command::Confirm,
            "channel" => {
                let (club_id, channel_id, name) = channel_args(&mut args, "channel")?;
                Command::Channel {
                    club_id,
                    channel_id,
                    name,
                }
            }
            "forum" => {
                let (club_id, channel_id, name) = channel_args(&mut args, "forum")?;
                Command::Forum {
                    club_id,
                    channel_id,
                    name,
                }
            }
            "dog" => Command::Dog(number(required(&mut args, "dog", "id")?, "dog", "id")?),
            "teacher" => Command::Teacher {
                club_id: number(required(&mut args, "teacher", "club")?, "teacher", "club")?,
                teacher_id: number(required(&mut args, "teacher", "id")?, "teacher", "id")?,
            },
            "rate" => Command::Rate(number(required(&mut args, "rate", "booking")?, "rate", "booking")?),
            "rate-accept" => Command::RateAccept,
            "rate-submit" => Command::RateSubmit(number(
                required(&mut args, "rate-submit", "stars")?,
                "rate-submit",
                "stars",
            )?),
            "rate-dismiss" => Command::RateDismiss,
            "pay-complete" => Command::PayComplete,
            "show" => match args.next() {
                None => Command::Show(None),
                Some(raw) => Command::Show(Some(RenderMode::parse(raw).ok_or_else(|| {
                    CommandError::InvalidArgument {
                        command: "show",
                        argument: "mode",
                        value: raw.to_string(),
                    }
                })?)),
            },
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("failed to serialize state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of one executed line
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (blank line, comment)
    Silent,
    Text(String),
    Quit,
}

/// Shell over a controller, an authenticator and a catalogue
pub struct Shell<A, C> {
    nav: NavigationController,
    auth: A,
    catalog: C,
    registry: PageRegistry,
    render: RenderMode,
}

impl<A: Authenticator, C: Catalog> Shell<A, C> {
    pub fn new(auth: A, catalog: C, registry: PageRegistry, render: RenderMode) -> Self {
        Self {
            nav: NavigationController::new(),
            auth,
            catalog,
            registry,
            render,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.nav
    }

    /// Parse and run one line
    pub fn execute(&mut self, line: &str) -> Result<Reply, ShellError> {
        match Command::parse(line)? {
            None => Ok(Reply::Silent),
            Some(command) => self.run(command),
        }
    }

    /// Read commands until end of input or `quit`. With `prompt`, `> ` is
    /// written before each line is read.
    pub fn serve(
        &mut self,
        input: impl BufRead,
        output: &mut impl Write,
        prompt: bool,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            match self.execute(&line?) {
                Ok(Reply::Silent) => {}
                Ok(Reply::Text(text)) => writeln!(output, "{}", text)?,
                Ok(Reply::Quit) => break,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }

    pub fn run(&mut self, command: Command) -> Result<Reply, ShellError> {
        tracing::debug!("shell: {:?}", command);
        match command {
            Command::Login { email, password } => {
                let credentials = Credentials::new(email, password);
                if self.nav.auth_flow().screen().signup_role().is_some() {
                    self.nav.sign_up(&self.auth, &credentials)?;
                } else {
                    self.nav.login(&self.auth, &credentials)?;
                }
            }
            Command::Logout => self.nav.logout(),
            Command::Signup(None) => self.nav.start_signup()?,
            Command::Signup(Some(role)) => self.nav.choose_signup(role)?,
            Command::AuthBack => self.nav.auth_back()?,
            Command::Go(raw) => {
                self.nav.navigate_to(&raw)?;
            }
            Command::Open { page, patch } => {
                let role = self.nav.role().ok_or(NavError::NotAuthenticated)?;
                let page = Page::parse(role, &page).ok_or(NavError::UnknownPage { role, raw: page })?;
                self.nav.navigate_with_entity(page, patch)?;
            }
            Command::Select(id) => {
                self.nav.select_listing(id)?;
            }
            Command::Back => {
                self.nav.back()?;
            }
            Command::Book {
                club_id,
                teacher_id,
            } => self.nav.book_appointment(club_id, teacher_id)?,
            Command::Confirm => self.nav.confirm_booking()?,
            Command::Channel {
                club_id,
                channel_id,
                name,
            } => {
                self.nav.open_channel(club_id, channel_id, name)?;
            }
            Command::Forum {
                club_id,
                channel_id,
                name,
            } => {
                self.nav.open_forum(club_id, channel_id, name)?;
            }
            Command::Dog(id) => {
                self.nav.open_dog(id)?;
            }
            Command::Teacher {
                club_id,
                teacher_id,
            } => {
                self.nav.open_teacher(club_id, teacher_id)?;
            }
            Command::Rate(booking_id) => self.nav.start_rating(booking_id)?,
            Command::RateAccept => self.nav.accept_rating_invitation()?,
            Command::RateSubmit(stars) => {
                self.nav.submit_rating(stars)?;
            }
            Command::RateDismiss => {
                self.nav.dismiss_rating()?;
            }
            Command::PayComplete => self.nav.complete_teachers_payment()?,
            Command::Show(mode) => {
                let mode = mode.unwrap_or(self.render);
                return Ok(Reply::Text(ui::render(
                    mode,
                    &self.nav,
                    &self.registry,
                    &self.catalog,
                )));
            }
            Command::State => {
                return Ok(Reply::Text(serde_json::to_string_pretty(
                    &self.nav.snapshot(),
                )?));
            }
            Command::Help => return Ok(Reply::Text(HELP.to_string())),
            Command::Quit => return Ok(Reply::Quit),
        }
        Ok(Reply::Text(self.location()))
    }

    /// One-line position report printed after every state change
    fn location(&self) -> String {
        match self.nav.current_page() {
            Some(page) => format!("-> {} ({})", page, page.title()),
            None => format!("-> {}", self.nav.auth_flow().screen().as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockCatalog;
    use crate::nav::{ClubPage, CustomerPage};
    use crate::session::DemoAuthenticator;

    fn shell() -> Shell<DemoAuthenticator, MockCatalog> {
        Shell::new(
            DemoAuthenticator::default(),
            MockCatalog::new(),
            PageRegistry::default(),
            RenderMode::Summary,
        )
    }

    #[test]
    fn parses_channel_names_with_spaces() {
        assert_eq!(
            Command::parse("channel 12 1 Puppy class").unwrap(),
            Some(Command::Channel {
                club_id: 12,
                channel_id: 1,
                name: "Puppy class".to_string()
            })
        );
    }

    #[test]
    fn teacher_needs_club_and_id() {
        assert_eq!(
            Command::parse("teacher 12 3").unwrap(),
            Some(Command::Teacher {
                club_id: 12,
                teacher_id: 3
            })
        );
        assert_eq!(
            Command::parse("teacher 12"),
            Err(CommandError::MissingArgument {
                command: "teacher",
                argument: "id"
            })
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# setup").unwrap(), None);
    }

    #[test]
    fn parse_errors_name_the_argument() {
        assert_eq!(
            Command::parse("select"),
            Err(CommandError::MissingArgument {
                command: "select",
                argument: "id"
            })
        );
        assert_eq!(
            Command::parse("dog rex"),
            Err(CommandError::InvalidArgument {
                command: "dog",
                argument: "id",
                value: "rex".to_string()
            })
        );
        assert_eq!(
            Command::parse("fly"),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
    }

    #[test]
    fn open_parses_entity_fields() {
        let cmd = Command::parse("open clubTeachersPayment seats=3 price=15").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Open {
                page: "clubTeachersPayment".to_string(),
                patch: SelectionPatch::new().teachers_pricing(3, 15),
            })
        );
        assert!(Command::parse("open clubTeachersPayment seats=3").is_err());
        assert!(Command::parse("open clubDetail club").is_err());
    }

    #[test]
    fn open_with_channel_defaults_name() {
        let cmd = Command::parse("open forum club=7 channel=2").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Open {
                page: "forum".to_string(),
                patch: SelectionPatch::new().club(7).channel(2, "#2"),
            })
        );
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut sh = shell();
        sh.execute("login customer@dogclub.test woofwoof").unwrap();
        assert!(matches!(
            sh.execute("go clubHome"),
            Err(ShellError::Nav(NavError::UnknownPage { .. }))
        ));
        assert!(sh.execute("select x").is_err());
        assert_eq!(
            sh.controller().current_page(),
            Some(Page::home(Role::Customer))
        );
    }

    #[test]
    fn signup_form_submits_through_login_command() {
        let mut sh = shell();
        sh.execute("signup").unwrap();
        sh.execute("signup club").unwrap();
        sh.execute("login newclub@dogclub.test secret1").unwrap();
        assert_eq!(sh.controller().role(), Some(Role::Club));
        assert_eq!(
            sh.controller().current_page(),
            Some(ClubPage::ClubHome.into())
        );
    }

    #[test]
    fn payment_flow_from_shell() {
        let mut sh = shell();
        sh.execute("login club@dogclub.test woofwoof").unwrap();
        sh.execute("go clubTeachersPricing").unwrap();
        sh.execute("open clubTeachersPayment seats=3 price=15").unwrap();
        let Reply::Text(screen) = sh.execute("show").unwrap() else {
            panic!("show must print");
        };
        assert!(screen.contains("3 seat(s) x 15 € = 45 €"));

        sh.execute("pay-complete").unwrap();
        assert_eq!(
            sh.controller().current_page(),
            Some(ClubPage::ClubTeachers.into())
        );
        assert_eq!(sh.controller().selection().teachers_pricing(), None);
    }

    #[test]
    fn state_prints_json_snapshot() {
        let mut sh = shell();
        sh.execute("login customer@dogclub.test woofwoof").unwrap();
        sh.execute("book 7 1").unwrap();
        let Reply::Text(json) = sh.execute("state").unwrap() else {
            panic!("state must print");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["currentPage"], CustomerPage::Booking.as_str());
        assert_eq!(value["selection"]["clubId"], 7);
        assert_eq!(value["selection"]["teacherId"], 1);
    }

    #[test]
    fn serve_prompts_before_each_line() {
        let mut sh = shell();
        let mut out = Vec::new();
        sh.serve("login customer@dogclub.test woofwoof\n".as_bytes(), &mut out, true)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> -> home (Home)\n> ");
    }

    #[test]
    fn serve_without_prompt_stops_at_quit() {
        let mut sh = shell();
        let mut out = Vec::new();
        sh.serve("fly\nquit\nlogout\n".as_bytes(), &mut out, false)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "error: unknown command: fly\n");
    }

    #[test]
    fn quit_stops() {
        assert_eq!(shell().execute("quit").unwrap(), Reply::Quit);
    }
}
