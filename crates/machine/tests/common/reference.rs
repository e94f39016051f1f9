//! Straight-line transcription of the loop body, used as an oracle for the machine.

/// Output of the fixed program for `seed`, computed without the operation table.
pub fn reference_output(seed: u64) -> Vec<u8> {
    let mut a = seed;
    let mut out = Vec::new();
    loop {
        let mut b = a % 8;
        b ^= 1;
        let c = (a >> b) & 0xFFFF_FFFF;
        b ^= c;
        a /= 8;
        b ^= 4;
        out.push((b % 8) as u8);
        if a == 0 {
            break;
        }
    }
    out
}
