use validator::ValidationError;

/// Parse the raw videos-count field. Returns the value only when it is a
/// positive integer greater than 10.
pub fn parse_count(raw: &str) -> Option<u32> {
    parse_positive(raw).filter(|n| *n > 10)
}

/// Parse the raw clip-duration field. Returns the value only when it is a
/// positive integer greater than 20.
pub fn parse_duration(raw: &str) -> Option<u32> {
    parse_positive(raw).filter(|n| *n > 20)
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Check an address against the `local@domain.tld` shape: no whitespace,
/// exactly one "@" with a non-empty part on each side, and at least one "."
/// inside the domain with non-empty text around it.
pub fn email_valid(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_singer_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("singer_present");
        err.message = Some("Singer name is required".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if !email_valid(value) {
        let mut err = ValidationError::new("email_format");
        err.message = Some("Invalid email address".into());
        return Err(err);
    }
    Ok(())
}
