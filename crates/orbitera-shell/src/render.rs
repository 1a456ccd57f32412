//! Colored terminal rendering of each screen.

use chrono::Local;
use colored::Colorize;
use orbitera_application::{AGENCY_INFO, DashboardSummary, MessageInbox};
use orbitera_core::record::{Message, Project, Service};
use orbitera_core::routing::Route;

pub fn banner() {
    println!("{}", "=== Orbitera ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();
}

pub fn help() {
    let rows = [
        ("/goto <path>", "Open a page, e.g. /goto /portfolio"),
        ("/login <email> <password>", "Sign in to the admin area"),
        ("/logout", "Sign out"),
        ("/whoami", "Show the current session"),
        ("/contact", "Fill in the contact form"),
        ("/dashboard", "Admin dashboard"),
        ("/projects [add | delete <id>]", "Manage portfolio projects"),
        ("/services [add | delete <id>]", "Manage services"),
        ("/messages [show <id> | delete <id>]", "Read contact messages"),
        ("quit | exit", "Leave"),
    ];
    for (usage, text) in rows {
        println!("  {:<38} {}", usage.bright_cyan(), text.bright_black());
    }
}

pub fn nav(current: Route) {
    let links: Vec<String> = if current.is_protected() {
        Route::admin_nav()
            .into_iter()
            .map(|r| link(r, r.is_active_for(&current.path())))
            .collect()
    } else {
        Route::public_nav()
            .into_iter()
            .map(|r| link(r, r == current))
            .collect()
    };
    println!("{}", links.join("  "));
}

fn link(route: Route, active: bool) -> String {
    if active {
        format!("[{}]", route.label()).bright_yellow().bold().to_string()
    } else {
        route.label().bright_black().to_string()
    }
}

pub fn page_title(title: &str) {
    println!();
    println!("{}", title.bright_white().bold());
}

pub fn projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", "No projects yet.".bright_black());
    }
    for project in projects {
        println!(
            "  {} {}",
            format!("#{}", project.id).bright_black(),
            project.title.bright_white()
        );
        println!("      {}", project.description);
        if let Some(url) = &project.image_url {
            println!("      {}", url.bright_blue());
        }
    }
}

pub fn services(services: &[Service]) {
    if services.is_empty() {
        println!("{}", "No services yet.".bright_black());
    }
    for service in services {
        println!(
            "  {} {} {}",
            format!("#{}", service.id).bright_black(),
            service.icon,
            service.title.bright_white()
        );
        println!("      {}", service.description);
    }
}

pub fn agency_info() {
    for (label, value) in AGENCY_INFO.rows() {
        println!("  {:<14} {}", label.bright_black(), value);
    }
}

pub fn dashboard(summary: &DashboardSummary) {
    println!("{}", summary.greeting().bright_white().bold());
    println!("  {:<10} {}", "Projects".bright_black(), summary.project_count);
    println!("  {:<10} {}", "Services".bright_black(), summary.service_count);
    println!("  {:<10} {}", "Messages".bright_black(), summary.message_count);
}

pub fn inbox(inbox: &MessageInbox) {
    println!("{}", inbox.count_label().bright_black());
    if inbox.is_empty() {
        println!("{}", "No messages yet.".bright_black());
        return;
    }

    let selected = inbox.selected().map(|m| m.id);
    for message in inbox.messages() {
        let marker = if Some(message.id) == selected { ">" } else { " " };
        println!(
            "{} {} {} {}  {}",
            marker.bright_yellow(),
            format!("({})", message.initial()).bright_magenta(),
            message.name.bright_white(),
            message.short_date_in(&Local).bright_black(),
            format!("#{}", message.id).bright_black()
        );
        println!("      {}", message.subject);
    }
}

pub fn message_detail(message: &Message) {
    println!(
        "{} {} <{}>",
        format!("({})", message.initial()).bright_magenta(),
        message.name.bright_white().bold(),
        message.email
    );
    println!("  {:<8} {}", "Subject".bright_black(), message.subject);
    println!("  {:<8} {}", "Sent".bright_black(), message.display_date_in(&Local));
    println!();
    for line in message.message.lines() {
        println!("  {}", line);
    }
    println!();
    println!("  {} {}", "Reply:".bright_black(), message.reply_link().bright_blue());
}

pub fn success(text: &str) {
    println!("{}", text.bright_green());
}

pub fn notice(text: &str) {
    println!("{}", text.yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", text.red());
}
