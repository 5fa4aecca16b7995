use validator::ValidationError;
use zxcvbn::{zxcvbn, Score};

const MIN_LENGTH: usize = 8;

fn rejection(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Account password rule: at least eight characters, at least one letter
/// and one digit, and a zxcvbn score of "somewhat guessable" or better.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_LENGTH {
        return Err(rejection("password_length", format!("Must be at least {} characters", MIN_LENGTH)));
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(rejection("password_mix", "Must include at least one letter and one number".into()));
    }

    let estimate = zxcvbn(password, &[]);
    if estimate.score() < Score::Two {
        let hint = estimate
            .feedback()
            .and_then(|feedback| feedback.warning())
            .map(|warning| warning.to_string())
            .unwrap_or_else(|| "Password is too easy to guess".to_string());
        return Err(rejection("password_strength", hint));
    }

    Ok(())
}
