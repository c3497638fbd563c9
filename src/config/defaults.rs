//! Default configuration values and well-known filenames

/// Per-package manifest filename
pub const MANIFEST_FILENAME: &str = "package.xml";

/// CMake project descriptor filename
pub const CMAKE_MARKER: &str = "CMakeLists.txt";

/// Python build descriptor filenames, checked in order
pub const PYTHON_MARKERS: &[&str] = &["setup.py", "pyproject.toml"];

/// Source subtree name under the workspace root
pub const SRC_DIR: &str = "src";

/// Install destination name under the workspace root
pub const INSTALL_DIR: &str = "install";

/// Per-package build directory name
pub const BUILD_DIR: &str = "build";

/// Python site-packages location relative to the install destination
pub const PYTHON_SITE_PACKAGES: &str = "lib/python3.8/site-packages";

/// Environment activation script filename
pub const SETUP_SCRIPT: &str = "setup.bash";
