//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` on http://127.0.0.1:8000.

use std::process::{Command, ExitCode, Stdio};

use crt_homepage::logging;

const PORT: &str = "8000";
const SITE_DIR: &str = "static";

fn build_bundle() -> Result<(), String> {
    log::info!("building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
        .map_err(|err| {
            format!(
                "wasm-pack not runnable ({}); install it from https://rustwasm.github.io/wasm-pack/",
                err
            )
        })?;
    if !status.success() {
        return Err(format!("wasm-pack exited with {}", status));
    }
    Ok(())
}

fn serve() -> Result<(), String> {
    log::info!("serving {} at http://127.0.0.1:{} (Ctrl-C to stop)", SITE_DIR, PORT);
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", SITE_DIR])
        .stdout(Stdio::null())
        .status()
        .map_err(|err| format!("failed to start http server: {}", err))?;
    if !status.success() {
        return Err(format!("http server exited with {}", status));
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init(log::Level::Info);

    match build_bundle().and_then(|()| serve()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
