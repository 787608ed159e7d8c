use once_cell::sync::Lazy;
use regex::Regex;

// 与常见 Web 框架一致：字母、数字以及 @ . + - _
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub const USERNAME_MAX_LENGTH: usize = 150;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Username must not be empty");
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err("Username must be at most 150 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username may contain only letters, digits and @/./+/-/_ characters");
    }
    Ok(())
}

/// 邮箱允许为空；非空时校验格式
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 按字符数校验字段长度上限
pub fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len > max {
        return Err(format!(
            "Field '{field}' must be at most {max} characters (got {len})"
        ));
    }
    Ok(())
}
