//! HTML Pages
//!
//! Minimal server-rendered markup. User-supplied strings go through
//! [`escape`].

use crate::domain::SessionUser;

/// Escape text for an HTML text node or a double-quoted attribute
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>{body}</body></html>\n",
        escape(title)
    )
}

pub fn home() -> String {
    layout(
        "Home",
        "<h1>Welcome</h1><p><a href=\"/login\">Log in</a></p>",
    )
}

pub fn login(login_url: &str) -> String {
    layout(
        "Login",
        &format!(
            "<h1>Login</h1><p><a href=\"{}\">Sign in with Google</a></p>",
            escape(login_url)
        ),
    )
}

pub fn dashboard(user: &SessionUser) -> String {
    layout(
        "Dashboard",
        &format!(
            "<h1>Dashboard: {}</h1>\
             <form action=\"/logout\" method=\"post\"><button>Logout</button></form>\
             <form action=\"/settings\" method=\"post\"><button>Settings</button></form>",
            escape(user.display_name())
        ),
    )
}

pub fn settings(user: &SessionUser) -> String {
    let email = user.email.as_deref().map(escape).unwrap_or_default();
    layout(
        "Settings",
        &format!(
            "<h1>Settings: {}</h1><p>{email}</p>\
             <form action=\"/logout\" method=\"post\"><button>Logout</button></form>\
             <form action=\"/dashboard\" method=\"post\"><button>Dashboard</button></form>",
            escape(user.display_name())
        ),
    )
}
