//! Pattern 6: Scoped Resources
//! Example: A File Handle Released on Every Exit Path
//!
//! Run with: cargo run --bin p6_scoped_file

use std::io::{self, Write};

use language_mechanics::scoped::{with_file, CleanupGuard, ManagedFile};

fn main() -> io::Result<()> {
    let dir = std::env::temp_dir();
    let path = dir.join("language_mechanics_hello.txt");

    println!("=== RAII Handle ===\n");

    {
        let mut file = ManagedFile::create(&path)?;
        file.write_line("Hey")?;
        file.write_line("Hey!")?;
        // `file` drops here: flushed and closed, no explicit call.
    }
    println!("wrote: {:?}", std::fs::read_to_string(&path)?);

    println!("=== Closure Scope ===\n");

    with_file(&path, |f| {
        writeln!(f, "h")?;
        writeln!(f, "g")
    })?;
    println!("wrote: {:?}", std::fs::read_to_string(&path)?);

    println!("=== Release on the Error Path ===\n");

    let result = with_file(&path, |f| {
        writeln!(f, "written before the failure")?;
        Err(io::Error::new(io::ErrorKind::Other, "body failed partway"))
    });
    println!("body error surfaced: {:?}", result.unwrap_err().to_string());
    // The handle was still released; the partial write is on disk.
    println!("on disk: {:?}", std::fs::read_to_string(&path)?);

    println!("\n=== Observable Cleanup ===\n");

    let guard = CleanupGuard::new(|| println!("cleanup ran (drop)"));
    println!("scope body runs first...");
    drop(guard);

    let disarmed = CleanupGuard::new(|| println!("this never prints"));
    disarmed.disarm();
    println!("disarmed guard dropped silently");

    std::fs::remove_file(&path)?;

    println!("\n=== Key Points ===");
    println!("1. Drop releases the resource on every exit path");
    println!("2. The closure form propagates the body's error after release");
    println!("3. A cleanup guard makes the release observable");
    println!("4. Disarming is the opt-out, not an extra close call");
    Ok(())
}
