/// Shown on the home page once registration went through
pub const SUCCESSFUL_REGISTRATION: &str =
    "Your registration was successful. Please confirm your email address to log in.";
