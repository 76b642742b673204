pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";
pub const UNAVAILABLE_NOTICE: &str = "This link is currently unavailable. Please check back later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkCheck {
    Proceed,
    Blocked,
}

pub fn is_placeholder(url: &str) -> bool {
    let trimmed = url.trim();
    trimmed.is_empty() || trimmed == "#"
}

pub fn check_outbound(url: &str) -> LinkCheck {
    if is_placeholder(url) {
        LinkCheck::Blocked
    } else {
        LinkCheck::Proceed
    }
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn placeholders_are_blocked() {
        assert_eq!(check_outbound(""), LinkCheck::Blocked);
        assert_eq!(check_outbound("#"), LinkCheck::Blocked);
        assert_eq!(check_outbound("  # "), LinkCheck::Blocked);
    }

    #[test]
    fn real_urls_proceed() {
        assert_eq!(check_outbound("https://npbirdnet.com"), LinkCheck::Proceed);
        assert_eq!(check_outbound("#contact"), LinkCheck::Proceed);
    }

    #[test]
    fn mailto_prefix() {
        assert_eq!(mailto("someone@example.com"), "mailto:someone@example.com");
    }
}
