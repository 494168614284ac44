use std::time::Duration;

pub const CONTACT_TABLE: &str = "contact_submissions";

/// How long the confirmation stays up before the form is usable again.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(3_000);

#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("http://localhost:54321") // `supabase start` default
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}
