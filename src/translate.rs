//! Translation of Windows paths embedded in ssh arguments
//!
//! Two idioms are recognised:
//! - the WSL network share of the target distro (`\\wsl$\Ubuntu\home\...`),
//!   which already points at the distro root and is stripped entirely;
//! - drive-letter paths (`C:\Users\...`), which are rewritten to the
//!   `/mnt/<drive>/` automount location.
//!
//! Arguments in which neither idiom is found are forwarded untouched, so
//! backslashes in flags or remote commands survive.

/// Prefix of the WSL network share, followed by the distro name
pub const SHARE_PREFIX: &str = r"\\wsl$\";

/// Mount point of Windows drives inside WSL
pub const DRIVE_MOUNT_ROOT: &str = "/mnt/";

const DRIVE_SEPARATOR: &str = r":\";

/// Translate every argument independently, keeping count and order
pub fn translate_paths<S: AsRef<str>>(args: &[S], distro: &str) -> Vec<String> {
    args.iter()
        .map(|arg| translate_arg(arg.as_ref(), distro))
        .collect()
}

/// Translate a single argument for the given distro
pub fn translate_arg(arg: &str, distro: &str) -> String {
    let mut is_path = false;

    let share = format!("{SHARE_PREFIX}{distro}");
    let mut out = if arg.contains(&share) {
        is_path = true;
        arg.replace(&share, "")
    } else {
        arg.to_string()
    };

    if let Some(replaced) = replace_drive_letters(&out) {
        is_path = true;
        out = replaced;
    }

    if is_path {
        out = out.replace('\\', "/");
    }

    out
}

/// Rewrite each `X:\` into `/mnt/x/`.
///
/// Returns `None` when nothing was rewritten. A separator found right at the
/// scan cursor stops the scan, which also means a token starting with `:\`
/// is never rewritten.
fn replace_drive_letters(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len() + DRIVE_MOUNT_ROOT.len());
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(DRIVE_SEPARATOR) {
        if offset == 0 {
            break;
        }

        let colon = cursor + offset;
        let segment = &input[cursor..colon];
        let Some((drive_at, drive)) = segment.char_indices().next_back() else {
            break;
        };

        out.push_str(&segment[..drive_at]);
        out.push_str(DRIVE_MOUNT_ROOT);
        out.extend(drive.to_lowercase());
        out.push('/');

        cursor = colon + DRIVE_SEPARATOR.len();
    }

    if cursor == 0 {
        return None;
    }

    out.push_str(&input[cursor..]);
    Some(out)
}
