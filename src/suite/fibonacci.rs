//! @ai:module:intent Built-in Fibonacci targets for Python, Go and Rust
//! @ai:module:layer domain
//! @ai:module:public_api default_targets
//! @ai:module:stateless true

use crate::suite::target::{BenchmarkTarget, SourceFile, ToolRequirement};

const PYTHON_SOURCE: &str = r#"
def fibonacci(n: int) -> int:
    if n <= 1:
        return n
    return fibonacci(n-1) + fibonacci(n-2)

print(fibonacci(30))
"#;

const GO_SOURCE: &str = r#"
package main

import "fmt"

func fibonacci(n int) int {
    if n <= 1 {
        return n
    }
    return fibonacci(n-1) + fibonacci(n-2)
}

func main() {
    fmt.Println(fibonacci(30))
}
"#;

const RUST_SOURCE: &str = r#"
fn fibonacci(n: u32) -> u32 {
    if n <= 1 {
        return n;
    }
    fibonacci(n-1) + fibonacci(n-2)
}

fn main() {
    println!("{}", fibonacci(30));
}
"#;

/// @ai:intent Default target list, in report order
/// @ai:effects pure
pub fn default_targets() -> Vec<BenchmarkTarget> {
    vec![
        BenchmarkTarget {
            name: "Python".to_string(),
            requires: vec![ToolRequirement::new("python")],
            setup: vec![],
            run: "python fib.py".to_string(),
            cleanup: vec![],
            sources: vec![SourceFile {
                path: "fib.py".to_string(),
                content: PYTHON_SOURCE.to_string(),
            }],
        },
        // Go and Rust both default to an executable named `fib`; give each its own name.
        // The go CLI has no --version flag.
        BenchmarkTarget {
            name: "Go".to_string(),
            requires: vec![ToolRequirement::with_args("go", &["version"])],
            setup: vec!["go build -o fib_go{exe_suffix} fib.go".to_string()],
            run: "{exe_prefix}fib_go{exe_suffix}".to_string(),
            cleanup: vec![],
            sources: vec![SourceFile {
                path: "fib.go".to_string(),
                content: GO_SOURCE.to_string(),
            }],
        },
        BenchmarkTarget {
            name: "Rust".to_string(),
            requires: vec![ToolRequirement::new("rustc")],
            setup: vec!["rustc -o fib_rs{exe_suffix} fib.rs".to_string()],
            run: "{exe_prefix}fib_rs{exe_suffix}".to_string(),
            cleanup: vec![],
            sources: vec![SourceFile {
                path: "fib.rs".to_string(),
                content: RUST_SOURCE.to_string(),
            }],
        },
    ]
}
