// Terminal-driven variant of the name prompt, built on dialoguer.
use std::error::Error;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

fn main() -> Result<(), Box<dyn Error>> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your name")
        .default("John Doe".to_string())
        .interact_text()?;

    println!("Name: {}", name);
    Ok(())
}
