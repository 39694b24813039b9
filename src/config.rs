// WhatsApp contact configuration. Both values are fixed at build time; the
// site never parameterizes them at runtime.
pub const WHATSAPP_NUMBER: &str = "5511999999999";
pub const WHATSAPP_MESSAGE: &str = "Olá! Vim pelo site e gostaria de uma consulta jurídica.";

/// Target for every call-to-action on the page, opened in a new tab.
pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_number_and_encoded_message() {
        let url = whatsapp_url();
        assert!(url.starts_with(&format!("https://wa.me/{WHATSAPP_NUMBER}?text=")));
        assert!(!url.contains(' '));
        // "Olá" percent-encodes its accented byte pair.
        assert!(url.contains("Ol%C3%A1"));
    }
}
