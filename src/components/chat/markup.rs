//! HTML fragments for chat bubbles. All user and server text is escaped here.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Escape `& < > "` for insertion as HTML text or attribute content.
pub fn escape_html(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	for ch in raw.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			other => out.push(other),
		}
	}
	out
}

/// Assistant reply: escaped, with newlines as line breaks.
pub fn reply_html(reply: &str) -> String {
	escape_html(reply).replace('\n', "<br>")
}

/// Fixed error bubble with the failure detail and a fallback contact link.
pub fn error_html(detail: &str, contact_email: &str) -> String {
	format!(
		"⚠️ Couldn't reach the assistant.<br>\
		 <small style=\"opacity:.5\">{}</small><br><br>\
		 Try again in a moment, or \
		 <a href=\"mailto:{}\">email directly</a>.",
		escape_html(detail),
		escape_html(contact_email),
	)
}
