//! Call-site provenance
//!
//! File and line come from [`Location::caller`], so every constructor that
//! records provenance is `#[track_caller]` and reports the line that called
//! it. The macros take the enclosing function's name at compile time with
//! [`function_name!`](crate::function_name) and pass it in through a
//! [`CallSite`]. Plain constructors only know the location, so the name is
//! looked up by walking the stack for the frame whose debug info points at
//! that file and line. Results are cached per call site. Without debug info
//! the caller is left empty.

use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Raw call-site data handed to a constructor
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    function: &'static str,
    location: &'static Location<'static>,
}

impl CallSite {
    /// Call site with a known enclosing function path
    pub const fn new(function: &'static str, location: &'static Location<'static>) -> Self {
        Self { function, location }
    }

    /// Call site of the caller; the function name is resolved on capture
    #[track_caller]
    pub fn here() -> Self {
        Self::new("", Location::caller())
    }

    /// Function path as given, before normalization
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Source location of the call
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Caller, file and line recorded when an error was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Provenance {
    caller: &'static str,
    file: &'static str,
    line: u32,
}

impl Provenance {
    /// Snapshot a call site, normalizing the function name
    pub fn capture(site: CallSite) -> Self {
        let caller = if site.function.is_empty() {
            resolve_caller(site.location)
        } else {
            normalize_function_name(site.function)
        };
        Self {
            caller,
            file: site.location.file(),
            line: site.location.line(),
        }
    }

    /// Name of the function that constructed the error, or `""`
    pub fn caller(&self) -> &'static str {
        self.caller
    }

    /// Source file of the construction site
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the construction site
    pub fn line(&self) -> u32 {
        self.line
    }

    /// True when nothing useful was recorded
    pub fn is_empty(&self) -> bool {
        self.caller.is_empty() && self.file.is_empty() && self.line == 0
    }
}

/// Reduce a type-name style function path to the bare function name.
///
/// Closure segments are dropped first so code inside a closure (or an async
/// block) reports the named function around it, then everything up to the
/// last `::` is removed.
///
/// ```
/// use seer_core::provenance::normalize_function_name;
///
/// assert_eq!(normalize_function_name("app::config::load"), "load");
/// assert_eq!(normalize_function_name("app::run::{{closure}}::{{closure}}"), "run");
/// assert_eq!(normalize_function_name("main"), "main");
/// ```
pub fn normalize_function_name(path: &str) -> &str {
    let mut path = path;
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(idx) => &path[idx + 2..],
        None => path,
    }
}

/// Normalized caller names keyed by file, line and column
static RESOLVED_CALLERS: Lazy<Mutex<HashMap<(&'static str, u32, u32), &'static str>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Name of the function containing `location`, or `""` if it cannot be found
fn resolve_caller(location: &'static Location<'static>) -> &'static str {
    let key = (location.file(), location.line(), location.column());
    if let Some(&name) = RESOLVED_CALLERS.lock().get(&key) {
        return name;
    }

    // One leaked name per distinct call site
    let name: &'static str = match lookup_caller(location) {
        Some(name) => Box::leak(name.into_boxed_str()),
        None => "",
    };
    *RESOLVED_CALLERS.lock().entry(key).or_insert(name)
}

fn lookup_caller(location: &Location<'_>) -> Option<String> {
    let file = Path::new(location.file());
    let mut found: Option<String> = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(location.line()) {
                return;
            }
            if symbol.filename().is_some_and(|path| path.ends_with(file)) {
                found = symbol.name().map(|name| format!("{name:#}"));
            }
        });
        found.is_none()
    });
    found.map(|path| normalize_function_name(&path).to_string())
}

/// Full path of the enclosing function, as a `&'static str`.
///
/// Inside closures the path ends in `::{{closure}}`; pass it through
/// [`normalize_function_name`] for display.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __seer_marker() {}
        fn __seer_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __seer_type_name_of(__seer_marker);
        match name.strip_suffix("::__seer_marker") {
            Some(enclosing) => enclosing,
            None => name,
        }
    }};
}

/// [`CallSite`] for the line where the macro is expanded
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::provenance::CallSite::new(
            $crate::function_name!(),
            ::std::panic::Location::caller(),
        )
    };
}
