//! Welcome banner

use owo_colors::OwoColorize;

/// Art above the version line. Every art row keeps its single trailing space.
const ART: &str = concat!(
    "\n",
    "     .o88b.  .d88b.  .d8888. .88b  d88. d888888b d8888b. \n",
    "    d8P  Y8 .8P  Y8. 88'  YP 88'YbdP`88   `88'   88  `8D \n",
    "    8P      88    88 `8bo.   88  88  88    88    88   88 \n",
    "    8b      88    88   `Y8b. 88  88  88    88    88   88 \n",
    "    Y8b  d8 `8b  d8' db   8D 88  88  88   .88.   88  .8D \n",
    "     `Y88P'  `Y88P'  `8888Y' YP  YP  YP Y888888P Y8888D' \n",
    "\n",
    "     ",
);

const TAIL: &str = "\n    ";

/// `=================| version {version} |================`
pub fn version_line(version: &str) -> String {
    format!("=================| version {} |================", version)
}

/// Render the banner without the final newline. The version is not validated.
pub fn render_welcome(version: &str, use_color: bool) -> String {
    let line = version_line(version);
    if use_color {
        format!("{}{}{}", ART.cyan(), line.white(), TAIL)
    } else {
        format!("{}{}{}", ART, line, TAIL)
    }
}
