use std::{env, error::Error};
use unc_access::{Credentials, ShareHandle};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let (Some(remote), Some(account)) = (args.next(), args.next()) else {
        eprintln!(r"usage: connect \\server\share DOMAIN\user   (password in UNC_PASSWORD)");
        return Ok(());
    };
    let password = env::var("UNC_PASSWORD").unwrap_or_default();

    let mut share = ShareHandle::new();
    if share.connect_with(&remote, Credentials::from_account(&account, password)).is_err() {
        println!("connect failed: {}", share.last_status());
        return Ok(());
    }

    println!("Connected {remote}");
    for entry in std::fs::read_dir(&remote)?.take(10) {
        println!("  {}", entry?.file_name().to_string_lossy());
    }

    // dropping `share` deletes the use session
    Ok(())
}
