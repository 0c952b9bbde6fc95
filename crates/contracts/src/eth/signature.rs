use units::keccak256;

/// First four bytes of the keccak-256 digest of a canonical function
/// signature, e.g. `balanceOf(address)`.
pub fn encode_4bytes(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}
