/// Label of the `index`-th vertex: `A`..`Z`, then `A1`..`Z1`, and so on.
///
/// `primes` appends one `′` per transform generation, so the image of `A`
/// after two transforms is `A′′`.
pub fn vertex_label(index: usize, primes: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    let round = index / 26;
    let mut out = String::with_capacity(4 + primes * 3);
    out.push(letter);
    if round > 0 {
        out.push_str(&round.to_string());
    }
    for _ in 0..primes {
        out.push('′');
    }
    out
}
