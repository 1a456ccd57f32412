//! Command execution against the composed application.

use anyhow::Result;
use orbitera_application::{MessageInbox, OrbiteraApp};
use orbitera_core::OrbiteraError;
use orbitera_core::record::{ContactSubmission, ProjectDraft, RecordId, ServiceDraft};
use orbitera_core::routing::{Navigation, Route};
use rustyline::Editor;
use rustyline::history::DefaultHistory;

use crate::command::{CatalogAction, Command, InboxAction};
use crate::helper::ShellHelper;
use crate::render;

/// Source of answers for multi-field forms.
pub trait Prompt {
    fn ask(&mut self, label: &str) -> Result<String>;
}

impl Prompt for Editor<ShellHelper, DefaultHistory> {
    fn ask(&mut self, label: &str) -> Result<String> {
        Ok(self.readline(&format!("  {}: ", label))?)
    }
}

pub struct Shell {
    app: OrbiteraApp,
    current: Route,
    inbox: Option<MessageInbox>,
}

impl Shell {
    pub fn new(app: OrbiteraApp) -> Self {
        Self {
            app,
            current: Route::Home,
            inbox: None,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn app(&self) -> &OrbiteraApp {
        &self.app
    }

    pub fn prompt_label(&self) -> String {
        format!("{} >> ", self.current)
    }

    /// Runs one command. Returns `false` when the shell should exit.
    pub async fn execute(&mut self, command: Command, prompt: &mut dyn Prompt) -> Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Help => render::help(),
            Command::Goto(path) => self.goto(&path)?,
            Command::Login { email, password } => self.login(&email, &password).await?,
            Command::Logout => {
                let nav = self.app.auth.logout()?;
                self.inbox = None;
                render::success("Signed out.");
                self.show(nav)?;
            }
            Command::Whoami => match self.app.session.user() {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("Not signed in."),
            },
            Command::Contact => self.contact(prompt).await?,
            Command::Dashboard => {
                if self.enter(Route::AdminDashboard)? {
                    self.render_route(Route::AdminDashboard)?;
                }
            }
            Command::Projects(action) => {
                if self.enter(Route::AdminProjects)? {
                    self.projects(action, prompt)?;
                }
            }
            Command::Services(action) => {
                if self.enter(Route::AdminServices)? {
                    self.services(action, prompt)?;
                }
            }
            Command::Messages(action) => {
                if self.enter(Route::AdminMessages)? {
                    self.messages(action)?;
                }
            }
        }
        Ok(true)
    }

    fn goto(&mut self, path: &str) -> Result<()> {
        match self.app.navigate(path) {
            Ok(nav) => self.show(nav),
            Err(e) if e.is_not_found() => {
                render::error(&format!("Page not found: {}", path));
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Passes `route` through the guard. On a redirect the login page is shown.
    fn enter(&mut self, route: Route) -> Result<bool> {
        let nav = self.app.guard.check(route);
        if nav.is_redirect() {
            self.show(nav)?;
            return Ok(false);
        }
        self.current = route;
        Ok(true)
    }

    fn show(&mut self, nav: Navigation) -> Result<()> {
        if let Navigation::Redirect { from, to: Route::Login } = nav {
            render::notice(&format!("{} requires sign-in.", from));
        }
        self.current = nav.destination();
        self.render_route(self.current)
    }

    fn render_route(&mut self, route: Route) -> Result<()> {
        render::nav(route);
        match route {
            Route::Home => {
                render::page_title("Orbitera");
                println!("We design and build digital products that launch brands into orbit.");
            }
            Route::About => {
                render::page_title("About");
                println!("A small studio of designers and engineers based in Bangalore.");
            }
            Route::Services | Route::AdminServices => {
                render::page_title("Services");
                render::services(&self.app.services.list()?);
            }
            Route::Portfolio | Route::AdminProjects => {
                render::page_title("Portfolio");
                render::projects(&self.app.projects.list()?);
            }
            Route::Contact => {
                render::page_title("Start Your Project");
                render::agency_info();
                println!("Use /contact to send us a message.");
            }
            Route::Login => {
                render::page_title("Welcome Back");
                println!("Use /login <email> <password> to sign in.");
            }
            Route::AdminDashboard => {
                render::page_title("Dashboard");
                render::dashboard(&self.app.dashboard()?);
            }
            Route::AdminMessages => {
                render::page_title("Messages");
                let inbox = self.load_inbox()?;
                render::inbox(inbox);
            }
        }
        Ok(())
    }

    async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        render::notice("Signing in...");
        match self.app.auth.submit_login(email, password).await {
            Ok(nav) => {
                if let Some(user) = self.app.session.user() {
                    render::success(&format!("Signed in as {}.", user.name));
                }
                self.show(nav)
            }
            Err(e) if e.is_invalid_credentials() => {
                render::error(&e.to_string());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn contact(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        self.current = Route::Contact;
        let submission = ContactSubmission::new(
            prompt.ask("Name")?,
            prompt.ask("Email")?,
            prompt.ask("Subject")?,
            prompt.ask("Message")?,
        );

        render::notice("Sending...");
        match self.app.contact.submit(submission).await {
            Ok(_) => {
                render::success("Message Sent! We'll get back to you within 24 hours.");
                Ok(())
            }
            Err(e) => report_form(e),
        }
    }

    fn projects(&mut self, action: CatalogAction, prompt: &mut dyn Prompt) -> Result<()> {
        match action {
            CatalogAction::List => self.render_route(Route::AdminProjects)?,
            CatalogAction::Add => {
                let draft = ProjectDraft::new(prompt.ask("Title")?, prompt.ask("Description")?)
                    .with_image_url(prompt.ask("Image URL (optional)")?);
                match self.app.projects.submit(draft) {
                    Ok(project) => render::success(&format!("Added project #{}.", project.id)),
                    Err(e) => report_form(e)?,
                }
            }
            CatalogAction::Delete(id) => {
                report_delete("project", id, self.app.projects.delete(id)?);
            }
        }
        Ok(())
    }

    fn services(&mut self, action: CatalogAction, prompt: &mut dyn Prompt) -> Result<()> {
        match action {
            CatalogAction::List => self.render_route(Route::AdminServices)?,
            CatalogAction::Add => {
                let draft = ServiceDraft::new(prompt.ask("Title")?, prompt.ask("Description")?)
                    .with_icon(prompt.ask("Icon (optional)")?);
                match self.app.services.submit(draft) {
                    Ok(service) => render::success(&format!("Added service #{}.", service.id)),
                    Err(e) => report_form(e)?,
                }
            }
            CatalogAction::Delete(id) => {
                report_delete("service", id, self.app.services.delete(id)?);
            }
        }
        Ok(())
    }

    fn messages(&mut self, action: InboxAction) -> Result<()> {
        match action {
            InboxAction::List => self.render_route(Route::AdminMessages)?,
            InboxAction::Show(id) => {
                let inbox = self.load_inbox()?;
                match inbox.select(id) {
                    Ok(message) => render::message_detail(message),
                    Err(e) if e.is_not_found() => render::error(&format!("No message #{}", id)),
                    Err(e) => return Err(e.into()),
                }
            }
            InboxAction::Delete(id) => {
                let inbox = self.load_inbox()?;
                let removed = inbox.delete(id)?;
                report_delete("message", id, removed);
            }
        }
        Ok(())
    }

    /// Loads the inbox on first use, refreshes it afterwards.
    fn load_inbox(&mut self) -> Result<&mut MessageInbox> {
        if let Some(inbox) = self.inbox.as_mut() {
            inbox.refresh()?;
        } else {
            self.inbox = Some(self.app.inbox()?);
        }
        self.inbox
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("inbox not loaded"))
    }

    pub fn selected_message(&self) -> Option<RecordId> {
        self.inbox.as_ref()?.selected().map(|m| m.id)
    }
}

/// Prints field errors; anything other than a validation failure propagates.
fn report_form(err: OrbiteraError) -> Result<()> {
    match err.form_errors() {
        Some(errors) => {
            for (field, message) in errors.iter() {
                render::error(&format!("  {}: {}", field, message));
            }
            Ok(())
        }
        None => Err(err.into()),
    }
}

fn report_delete(entity: &str, id: RecordId, removed: bool) {
    if removed {
        render::success(&format!("Deleted {} #{}.", entity, id));
    } else {
        render::notice(&format!("No {} #{}.", entity, id));
    }
}
