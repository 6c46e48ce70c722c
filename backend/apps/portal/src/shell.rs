//! Interactive portal shell
//!
//! Line-oriented stand-in for the web UI: each input line is one user
//! action, and the shell prints the toasts and page changes it causes.

use std::io::Write;

use auth::domain::repository::{AuthDirectory, SessionStore};
use auth::models::UserRole;
use auth::presentation::{
    LOGIN_PATH, LoginForm, Navigation, Route, SubmitOutcome, menu_for, navigate, sign_out,
    submit_federated_login, submit_login,
};
use auth::SessionHolder;
use platform::timer::Delay;

/// Longest chain is protected page -> login -> home
const MAX_REDIRECTS: usize = 4;

const HELP: &str = "\
commands:
  login <email> <password>   sign in with the email/password form
  google                     sign in with Google (demo account)
  logout                     sign out
  go <path>                  navigate, e.g. `go /dashboard`
  whoami                     show the current session
  menu                       show the sidebar of the current portal
  help                       show this help
  quit                       exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Google,
    Logout,
    Go(String),
    WhoAmI,
    Menu,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Empty;
        };

        match head {
            "login" => {
                // The password is the rest of the line, inner spaces included
                let rest = line.trim_start()[head.len()..].trim_start();
                let (email, password) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Login {
                    email: email.to_string(),
                    password: password.trim_start().to_string(),
                }
            }
            "google" => Command::Google,
            "logout" => Command::Logout,
            "go" => Command::Go(words.next().unwrap_or(LOGIN_PATH).to_string()),
            "whoami" => Command::WhoAmI,
            "menu" => Command::Menu,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, S, D>
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    holder: SessionHolder<R, S, D>,
    location: String,
}

impl<R, S, D> Shell<R, S, D>
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    pub fn new(holder: SessionHolder<R, S, D>) -> Self {
        Self {
            holder,
            location: LOGIN_PATH.to_string(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Render the entry page for the restored state
    pub fn open(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Prominence Bank portal. Type `help` for commands.")?;
        self.go(LOGIN_PATH, out)
    }

    pub async fn handle(&mut self, command: Command, out: &mut impl Write) -> std::io::Result<Flow> {
        match command {
            Command::Login { email, password } => {
                let outcome = submit_login(&mut self.holder, &LoginForm::new(email, password)).await;
                self.apply(outcome, out)?;
            }
            Command::Google => {
                let outcome = submit_federated_login(&mut self.holder).await;
                self.apply(outcome, out)?;
            }
            Command::Logout => {
                let outcome = sign_out(&mut self.holder);
                self.apply(outcome, out)?;
            }
            Command::Go(path) => self.go(&path, out)?,
            Command::WhoAmI => match self.holder.session() {
                Some(session) => {
                    writeln!(
                        out,
                        "{} <{}> role={} id={}",
                        session.display_name(),
                        session.email(),
                        session.role(),
                        session.subject_id()
                    )?;
                    if let Some(customer) = session.customer() {
                        writeln!(
                            out,
                            "customer {} ({}, {})",
                            customer.id,
                            customer.display_name(),
                            customer.customer_type
                        )?;
                        writeln!(out, "address {}", customer.address.one_line())?;
                        if !customer.status.is_active() {
                            writeln!(out, "profile {}", customer.status)?;
                        }
                    }
                }
                None => writeln!(out, "not signed in")?,
            },
            Command::Menu => self.print_menu(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
            Command::Unknown(word) => writeln!(out, "unknown command `{word}`, try `help`")?,
        }
        Ok(Flow::Continue)
    }

    fn apply(&mut self, outcome: SubmitOutcome, out: &mut impl Write) -> std::io::Result<()> {
        if let Some(notification) = &outcome.notification {
            writeln!(out, "{notification}")?;
        }
        match outcome.redirect {
            Some(to) => self.go(to, out),
            None => Ok(()),
        }
    }

    fn go(&mut self, path: &str, out: &mut impl Write) -> std::io::Result<()> {
        let mut target = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match navigate(self.holder.state(), &target) {
                Navigation::Render(route) => {
                    self.location = route.path().unwrap_or_else(|| target.clone());
                    return writeln!(out, "-> {}", describe(&route, &target));
                }
                Navigation::Redirect(to) => {
                    writeln!(out, "redirect {target} -> {to}")?;
                    target = to.to_string();
                }
                Navigation::Pending => return writeln!(out, "loading..."),
            }
        }
        tracing::warn!(path, "Redirect limit reached");
        Ok(())
    }

    fn print_menu(&self, out: &mut impl Write) -> std::io::Result<()> {
        let Some(role) = self.holder.state().role() else {
            return writeln!(out, "sign in to see the portal menu");
        };
        let portal = match role {
            UserRole::Client => "Client portal",
            UserRole::Admin => "Admin portal",
        };
        writeln!(out, "{portal}")?;
        for section in menu_for(role) {
            let indent = match section.title {
                Some(title) => {
                    writeln!(out, "  {title}")?;
                    "    "
                }
                None => "  ",
            };
            for item in section.items {
                writeln!(out, "{indent}{:<24} {}", item.title, item.href)?;
            }
        }
        Ok(())
    }
}

fn describe(route: &Route, requested: &str) -> String {
    match route {
        Route::Login => "login page".to_string(),
        Route::NotFound => format!("404 not found: {requested}"),
        Route::Client(page) => format!("client portal: {page:?}"),
        Route::Admin(page) => format!("admin portal: {page:?}"),
    }
}
