/// Name used for log targets and the manifest package name.
pub const APP_NAME: &str = "selaco-archipelago";

/// Environment variable overriding the project root directory.
pub const ROOT_ENV: &str = "SELACO_ROOT";

/// Environment variables overriding the external programs.
pub const GIT_ENV: &str = "SELACO_BUILD_GIT";
pub const CMAKE_ENV: &str = "SELACO_BUILD_CMAKE";
pub const CC_ENV: &str = "SELACO_BUILD_CC";
pub const MAKE_ENV: &str = "SELACO_BUILD_MAKE";

pub const VCPKG_REPO: &str = "https://github.com/Microsoft/vcpkg.git";
pub const ZMUSIC_REPO: &str = "https://github.com/coelckers/ZMusic.git";

/// Packages installed through vcpkg, in install order.
pub const DEPENDENCIES: &[&str] = &[
  "rapidjson",
  "zlib",
  "bzip2",
  "libjpeg-turbo",
  "libpng",
  "openal-soft",
  "libvorbis",
  "libflac",
  "libsndfile",
  "mpg123",
];

pub const BUILD_DIR: &str = "build";
pub const VCPKG_DIR: &str = "vcpkg";
pub const LIBRARIES_DIR: &str = "libraries";
pub const ZMUSIC_DIR: &str = "zmusic";

pub const CONFIG_FILE: &str = "archipelago.cfg";
pub const MANIFEST_FILE: &str = "vcpkg.json";
pub const REGISTRY_CONFIG_FILE: &str = "vcpkg-configuration.json";
pub const LAUNCH_SCRIPT_UNIX: &str = "launch_selaco.sh";
pub const LAUNCH_SCRIPT_WINDOWS: &str = "launch_selaco.bat";

/// CMake option that enables the Archipelago client in the engine build.
pub const FEATURE_FLAG: &str = "-DARCHIPELAGO_INTEGRATION=ON";

/// Toolchain file inside the vcpkg checkout, relative to its root.
pub const VCPKG_TOOLCHAIN: &[&str] = &["scripts", "buildsystems", "vcpkg.cmake"];

/// Parallelism used when the host cannot report its CPU count.
pub const FALLBACK_JOBS: usize = 4;
