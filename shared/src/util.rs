/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque reservation ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at front-desk scale)
///
/// Rendered as a decimal string because reservation IDs are opaque to every
/// consumer, including the durable store.
pub fn reservation_id() -> String {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    ((ts << 12) | rand_bits).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_id_is_an_opaque_positive_number() {
        let id = reservation_id();
        let value: i64 = id.parse().expect("decimal string");
        assert!(value > 0);
    }

    #[test]
    fn reservation_ids_differ_across_milliseconds() {
        let first = reservation_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = reservation_id();
        assert_ne!(first, second);
    }
}
