use crate::ui::splash::LOGO_NAME;

macro_rules! print_cmd_error {
    ($tt:tt) => {
        println!("\x1b[1;31m[ERROR] {}\x1b[0m", $tt);
    };
    ($tt:tt, $($tts:tt)+) => {
        println!("\x1b[1;31m[ERROR] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

macro_rules! handle_cmd_error {
    ($err:tt, $tt:tt) => {{
        print_cmd_error!($tt, "{}", $err);
        format!("{}", $err)
    }};
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;33m[INFO] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

macro_rules! print_cmd_success {
    ($tt:tt) => {
        println!("\x1b[1;32m[OK] {}\x1b[0m", $tt);
    };
}

/// Shown when the admin API cannot be reached at all.
pub(crate) fn print_friendly_error_header(api_url: &str) {
    // RGB: FF = 255, AA = 170, 00 = 0
    println!("\x1b[38;2;255;170;0m{}\x1b[0m", LOGO_NAME);
    println!("\x1b[38;2;255;170;0mThe back office is not answering.\x1b[0m");
    println!(
        "Could not reach {}. Check the URL with `courier-admin config set --api-url` or try again shortly.\n",
        api_url
    );
}

pub(crate) use handle_cmd_error;
pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
pub(crate) use print_cmd_success;
