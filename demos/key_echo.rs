//! Print every decoded key event. Ctrl+C exits.

use std::time::Duration;

use tape_prompt::{poll_key, EnvConfig, ProcessTerminal, RawModeGuard, RenderSurface};

fn main() -> tape_prompt::Result<()> {
    let config = EnvConfig::from_env()?;
    let _logging = tape_prompt::logging::init(&config)?;

    let surface = RenderSurface::new(ProcessTerminal::new());
    let _raw_mode = RawModeGuard::enable()?;

    surface.print("Press Ctrl+C to exit...\r\n");
    surface.flush();

    let mut idle_ticks = 0u32;
    loop {
        let Some((raw, key)) = poll_key(Duration::from_secs(1))? else {
            idle_ticks += 1;
            if idle_ticks % 10 == 0 {
                surface.print("Still waiting for a key...\r\n");
                surface.flush();
            }
            continue;
        };
        idle_ticks = 0;
        surface.print(&format!("You pressed {raw:?}, key info: {key:?}\r\n"));
        surface.flush();

        if key.is_ctrl_c() {
            surface.print("Ctrl+C pressed, exiting...\r\n");
            surface.flush();
            break;
        }
    }
    Ok(())
}
