/// OS-level appearance signals consumed at bootstrap.
pub trait SystemSignals {
    fn prefers_dark_scheme(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
}

/// Reads the signals from the running desktop session.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignals;

impl SystemSignals for OsSignals {
    fn prefers_dark_scheme(&self) -> bool {
        detect_system_dark_mode()
    }

    fn prefers_reduced_motion(&self) -> bool {
        detect_reduced_motion()
    }
}

/// Signals with fixed values, for hosts that already know them (and tests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSignals {
    pub dark: bool,
    pub reduced_motion: bool,
}

impl SystemSignals for FixedSignals {
    fn prefers_dark_scheme(&self) -> bool {
        self.dark
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(scheme) = gsettings_get("color-scheme") {
            if scheme.contains("prefer-dark") {
                return true;
            }
        }
        if let Some(theme) = gsettings_get("gtk-theme") {
            if theme.to_lowercase().contains("dark") {
                return true;
            }
        }
    }

    // macOS: Check AppleInterfaceStyle
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    // Default to light mode if detection fails
    false
}

pub fn detect_reduced_motion() -> bool {
    // Windows: "Show animations in Windows" off sets MinAnimate to "0"
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(metrics) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Control Panel\\Desktop\\WindowMetrics")
        {
            if let Ok(value) = metrics.get_value::<String, _>("MinAnimate") {
                return value.trim() == "0";
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(enabled) = gsettings_get("enable-animations") {
            return enabled.trim() == "false";
        }
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "com.apple.universalaccess", "reduceMotion"])
            .output()
        {
            if output.status.success() {
                return String::from_utf8_lossy(&output.stdout).trim() == "1";
            }
        }
    }

    false
}

/// Read a key from the GNOME desktop interface schema.
#[cfg(target_os = "linux")]
fn gsettings_get(key: &str) -> Option<String> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_signals() {
        let signals = FixedSignals { dark: true, reduced_motion: false };
        assert!(signals.prefers_dark_scheme());
        assert!(!signals.prefers_reduced_motion());
        assert_eq!(FixedSignals::default(), FixedSignals { dark: false, reduced_motion: false });
    }
}
