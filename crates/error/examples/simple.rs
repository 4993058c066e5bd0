use meridian_error::prelude::*;

const CODE_CONFIG: ErrorCode = ErrorCode::new("config");
const CODE_STORAGE: ErrorCode = ErrorCode::new("storage");

fn main() {
    // Composing a chain: a classified root cause, wrapped with context.
    let root = err!(CODE_STORAGE, "segment {} is corrupt", 17);
    let err = wrap_err!(root, "loading index").embed("segment", 17_u32);

    println!("rendered: {err}");
    println!("code:     {}", err.code());
    println!("segment:  {:?}", err.get::<u32>("segment"));

    // Folding several failures into one value.
    let combined = Error::append(
        None,
        [
            err!(CODE_CONFIG, "missing field `ttl`"),
            err!(CODE_CONFIG, "unknown field `tll`"),
        ],
    );
    if let Some(combined) = combined {
        println!("combined: {combined}");
    }

    // Diagnostics: accumulate, then promote at a reporting boundary.
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::info("profile loaded").build());
    diagnostics.push(
        Diagnostic::warning("deprecated field")
            .detail("`retries` moved to the `backoff` section")
            .metadata("field", "retries")
            .build(),
    );
    diagnostics.push(
        Diagnostic::error("schema rejected")
            .code(CODE_CONFIG)
            .build(),
    );

    println!("worst severity: {}", diagnostics.severity());
    if let Some(err) = diagnostics.to_error(Severity::Warning) {
        println!("promoted: {err}");
    }
}
