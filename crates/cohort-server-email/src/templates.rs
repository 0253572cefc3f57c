// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Welcome email template rendering.

pub const WELCOME_SUBJECT: &str = "Welcome to the Program";

const WELCOME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Welcome</title>
</head>
<body style="margin: 0; padding: 0; background-color: #f4f4f4; font-family: 'Lato', Helvetica, Arial, sans-serif;">
  <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
    <tr>
      <td align="center" style="padding: 24px;">
        <table role="presentation" width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 4px;">
          <tr>
            <td style="padding: 32px;">
              <h1 style="font-size: 24px; margin: 0 0 16px 0;">Welcome, {{first_name}}!</h1>
              <p style="font-size: 16px; line-height: 24px; margin: 0 0 16px 0;">
                Your enrollment is confirmed. You are officially part of the
                upcoming cohort, and we could not be happier to have you.
              </p>
              <p style="font-size: 16px; line-height: 24px; margin: 0 0 16px 0;">
                Keep an eye on this inbox &mdash; your learning track schedule
                and onboarding details are on their way.
              </p>
              <p style="font-size: 16px; line-height: 24px; margin: 0;">
                &mdash; The Program Team
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#;

const WELCOME_TEXT: &str = "Welcome, {{first_name}}!\n\n\
Your enrollment is confirmed. You are officially part of the upcoming cohort, \
and we could not be happier to have you.\n\n\
Keep an eye on this inbox - your learning track schedule and onboarding \
details are on their way.\n\n\
- The Program Team\n";

/// Render the HTML welcome body for a recipient.
pub fn welcome_html(first_name: &str) -> String {
	WELCOME_HTML.replace("{{first_name}}", first_name)
}

/// Render the plain text welcome body for a recipient.
pub fn welcome_text(first_name: &str) -> String {
	WELCOME_TEXT.replace("{{first_name}}", first_name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn html_substitutes_first_name() {
		let body = welcome_html("Jane");
		assert!(body.contains("Welcome, Jane!"));
		assert!(!body.contains("{{first_name}}"));
	}

	#[test]
	fn text_substitutes_first_name() {
		let body = welcome_text("Jane");
		assert!(body.contains("Welcome, Jane!"));
		assert!(!body.contains("{{first_name}}"));
	}
}
