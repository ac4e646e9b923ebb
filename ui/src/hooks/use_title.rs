use yew::prelude::*;

const APP_NAME: &str = "SewaBazaar";

/// Build the document title from a page's own part: "Earnings -
/// SewaBazaar". An empty part yields the bare app name for the home
/// page.
fn page_title(part: &str) -> String {
    if part.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{part} - {APP_NAME}")
    }
}

/// Sets the document title, suffixed with the app name. Pages pass only
/// their own part ("Earnings", "My Bookings"). No cleanup on unmount
/// since each page sets its own title, and unmount/mount ordering isn't
/// guaranteed during route transitions.
#[hook]
pub fn use_title(part: &str) {
    let title = page_title(part);
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_titles_carry_the_app_suffix() {
        assert_eq!(page_title("Earnings"), "Earnings - SewaBazaar");
        assert_eq!(page_title(""), "SewaBazaar");
    }
}
