// Desktop builds on Linux link against system WebKitGTK and libxdo; name the missing package up front.

struct NativeDep {
    pkg_config: &'static str,
    lib: &'static str,
    fedora: &'static str,
    debian: &'static str,
}

const LINUX_DESKTOP_DEPS: &[NativeDep] = &[
    NativeDep {
        pkg_config: "libxdo",
        lib: "libxdo",
        fedora: "libxdo-devel",
        debian: "libxdo-dev",
    },
    NativeDep {
        pkg_config: "webkit2gtk-4.1",
        lib: "libwebkit2gtk-4.1",
        fedora: "webkit2gtk4.1-devel",
        debian: "libwebkit2gtk-4.1-dev",
    },
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !(is_desktop && is_linux) {
        return;
    }
    for dep in LINUX_DESKTOP_DEPS {
        if !installed(dep) {
            println!(
                "cargo:warning=desktop build needs {} (dnf install {} / apt install {})",
                dep.lib, dep.fedora, dep.debian
            );
        }
    }
}

// libxdo often ships without a .pc file, so fall back to the linker cache.
fn installed(dep: &NativeDep) -> bool {
    let by_pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", dep.pkg_config])
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    by_pkg_config
        || std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains(dep.lib))
            .unwrap_or(false)
}
