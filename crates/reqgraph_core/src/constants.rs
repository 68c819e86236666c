//! Constants for file extensions, index files and builtin module names.
//!
//! Relative imports are probed with [`RESOLVE_EXTENSIONS`] appended to the
//! joined path, then with each of [`INDEX_FILES`] inside it. The order of
//! both lists is the probing priority.

/// Extensions to try when resolving an import (in priority order)
pub const RESOLVE_EXTENSIONS: &[&str] = &[
    "js",     // JavaScript
    "json",   // JSON data
    "mjs",    // JavaScript module
    "cjs",    // JavaScript CommonJS
    "ts",     // TypeScript
    "tsx",    // TypeScript with JSX
    "mts",    // TypeScript module
    "cts",    // TypeScript CommonJS
    "jsx",    // JavaScript with JSX
    "coffee", // CoffeeScript
];

/// Index file names to try when resolving directory imports
pub const INDEX_FILES: &[&str] = &[
    "index.js",
    "index.json",
    "index.mjs",
    "index.cjs",
    "index.ts",
    "index.tsx",
    "index.mts",
    "index.cts",
    "index.jsx",
    "index.coffee",
];

/// Scheme prefix that always marks a builtin module
pub const NATIVE_PREFIX: &str = "node:";

/// Modules provided by the Node.js runtime itself
pub const NODE_BUILTINS: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];
