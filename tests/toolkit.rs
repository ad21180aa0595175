//! End-to-end tests of the toolkit through its public API, exercising the
//! paths a storefront login/registration flow takes.

use formguard::config::{load_config_str, GuardConfig};
use formguard::escape::escape_html;
use formguard::rate_limit::RateLimiter;
use formguard::sanitize::sanitize_input;
use formguard::validate::{validate_email, validate_name, validate_password};

mod common;
use common::ManualClock;

#[test]
fn test_login_flow_admission_sequence() {
    // Shipped login policy: 5 attempts per minute
    let clock = ManualClock::at(0);
    let config = GuardConfig::default();
    let limiter = config
        .policy("login")
        .unwrap()
        .build_with_clock(clock.clone());

    let key = "login:user@example.com";
    for _ in 0..5 {
        assert!(limiter.check(key));
    }
    assert!(!limiter.check(key));

    // One minute later the window has slid past every attempt
    clock.set(60_001);
    assert!(limiter.check(key));
}

#[test]
fn test_login_and_register_limiters_do_not_interfere() {
    let clock = ManualClock::at(0);
    let config = GuardConfig::default();
    let login = config.policy("login").unwrap().build_with_clock(clock.clone());
    let register = config
        .policy("register")
        .unwrap()
        .build_with_clock(clock.clone());

    let key = "user@example.com";
    for _ in 0..3 {
        assert!(register.check(key));
    }
    assert!(!register.check(key));

    // Same identifier, separate limiter, untouched budget
    for _ in 0..5 {
        assert!(login.check(key));
    }
    assert!(!login.check(key));
}

#[test]
fn test_registration_form_validation_pipeline() {
    let email = sanitize_input("  shopper@example.com  ");
    assert!(validate_email(&email));

    assert!(validate_name("Ana").valid);

    let weak = validate_password("alllowercase");
    assert!(!weak.valid);
    assert_eq!(weak.errors.len(), 3);

    let strong = validate_password("Abcd123!");
    assert!(strong.valid);
    assert!(strong.errors.is_empty());
}

#[test]
fn test_hostile_review_text_is_neutralized() {
    let hostile = r#"  <img src=x onerror=alert(1)> javascript:void(0) great product!  "#;
    let sanitized = sanitize_input(hostile);
    assert!(!sanitized.contains('<'));
    assert!(!sanitized.contains('>'));
    assert!(!sanitized.to_lowercase().contains("javascript:"));
    assert!(!sanitized.to_lowercase().contains("onerror="));
    assert!(sanitized.contains("great product!"));

    // Whatever survives sanitization still goes through escaping on render
    let rendered = escape_html(&sanitized);
    assert!(!rendered.contains('<'));
    assert!(!rendered.contains('>'));
}

#[test]
fn test_config_drives_limiter_construction() {
    let config = load_config_str(
        r#"
        [rate_limits.custom.checkout]
        max_requests = 2
        window_ms = 1000
        "#,
    )
    .unwrap();

    let clock = ManualClock::at(0);
    let checkout = config
        .policy("checkout")
        .unwrap()
        .build_with_clock(clock.clone());

    assert!(checkout.check("cart-42"));
    assert!(checkout.check("cart-42"));
    assert!(!checkout.check("cart-42"));

    clock.advance(1_001);
    assert!(checkout.check("cart-42"));
}

#[test]
fn test_wall_clock_limiter_smoke() {
    // No manual clock here; just the admission count within one instant
    let limiter = RateLimiter::new(2, 60_000);
    assert!(limiter.check("x"));
    assert!(limiter.check("x"));
    assert!(!limiter.check("x"));
}

#[test]
fn test_concurrent_checks_never_over_admit() {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    // 8 threads race 160 attempts against a budget of 50; the lock held
    // across check-and-record means exactly 50 get through
    let limiter = Arc::new(RateLimiter::new(50, 60_000));
    let admitted = Arc::new(AtomicU32::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            let admitted = Arc::clone(&admitted);
            std::thread::spawn(move || {
                for _ in 0..20 {
                    if limiter.check("flash-sale") {
                        admitted.fetch_add(1, Ordering::SeqCst);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(admitted.load(Ordering::SeqCst), 50);
}

#[test]
fn test_configured_headers_end_to_end() {
    let config = load_config_str(
        r#"
        [headers]
        csp = "default-src 'self'; img-src 'self' data: https:"
        "#,
    )
    .unwrap();

    let headers = config.headers.security_headers().unwrap();
    let pairs = headers.pairs();
    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[3].0, "Content-Security-Policy");
    assert!(pairs[3].1.starts_with("default-src 'self'"));
}
