#![allow(dead_code)]

use std::io::Read;
use std::process::{Command, Stdio};
use tracing::warn;

/// How `value_at` resolves u/v coordinates outside [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClampMode {
    Normal,
    Mirror,
    Tile,
}

/// A 2D boolean mask sampled by `value_at`. Either owns its pixel data or is
/// empty (failed load) -- an empty texture always samples `false`.
#[derive(Clone, Debug)]
pub struct Texture {
    width: usize,
    height: usize,
    data: Vec<bool>,
    mode: ClampMode,
}

impl Texture {
    /// An owning construction from an in-memory mask, one bool per pixel.
    pub fn from_mask(width: usize, height: usize, data: Vec<bool>) -> Texture {
        debug_assert_eq!(data.len(), width * height);
        Texture {
            width,
            height,
            data,
            mode: ClampMode::Normal,
        }
    }

    /// An empty texture: `value_at` always returns `false`.
    pub fn empty() -> Texture {
        Texture {
            width: 0,
            height: 0,
            data: Vec::new(),
            mode: ClampMode::Normal,
        }
    }

    /// Invokes `python3 texload.py "<path>"` and reads its stdout protocol:
    /// a little-endian int16 width, int16 height, then width*height mask
    /// bytes (0 = off, nonzero = on). Any failure along the way -- spawn
    /// failure, non-positive dimensions, short read -- leaves the texture
    /// empty rather than propagating an error; this is documented,
    /// load-bearing behavior, not an oversight.
    pub fn from_external_loader(path: &str) -> Texture {
        let output = Command::new("python3")
            .arg("texload.py")
            .arg(path)
            .stdout(Stdio::piped())
            .output();

        let output = match output {
            Ok(output) if output.status.success() => output,
            Ok(_) => {
                warn!(path, "texload.py exited with a failure status");
                return Texture::empty();
            }
            Err(error) => {
                warn!(path, %error, "failed to spawn texload.py");
                return Texture::empty();
            }
        };

        let mut stdout = output.stdout.as_slice();
        let mut header = [0u8; 4];
        if stdout.read_exact(&mut header).is_err() {
            warn!(path, "texload.py produced a truncated header");
            return Texture::empty();
        }

        let width = i16::from_le_bytes([header[0], header[1]]);
        let height = i16::from_le_bytes([header[2], header[3]]);
        if width <= 0 || height <= 0 {
            warn!(path, width, height, "texload.py reported non-positive dimensions");
            return Texture::empty();
        }

        let (width, height) = (width as usize, height as usize);
        let mut raw = vec![0u8; width * height];
        if stdout.read_exact(&mut raw).is_err() {
            warn!(path, "texload.py produced fewer pixels than advertised");
            return Texture::empty();
        }

        Texture::from_mask(width, height, raw.into_iter().map(|b| b != 0).collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        self.mode = mode;
    }

    /// Nearest-neighbor sample. Returns `false` unconditionally for an
    /// empty (failed-load) texture.
    pub fn value_at(&self, u: f64, v: f64) -> bool {
        if self.data.is_empty() {
            return false;
        }

        let (u, v) = match self.mode {
            ClampMode::Normal => (u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)),
            ClampMode::Mirror => (mirror(u), mirror(v)),
            ClampMode::Tile => (tile(u), tile(v)),
        };

        let x = ((u * self.width as f64) as usize).min(self.width - 1);
        let y = ((v * self.height as f64) as usize).min(self.height - 1);

        self.data[x + y * self.width]
    }
}

fn mirror(u: f64) -> f64 {
    let u = u.abs();
    let int_part = u.trunc();
    let frac = u - int_part;

    if (int_part as i64) & 1 == 1 {
        1.0 - frac
    } else {
        frac
    }
}

fn tile(u: f64) -> f64 {
    let frac = u.fract();
    if frac < 0.0 {
        frac + 1.0
    } else {
        frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Texture {
        // 2x2: (0,0)=on (1,0)=off / (0,1)=off (1,1)=on
        Texture::from_mask(2, 2, vec![true, false, false, true])
    }

    #[test]
    fn empty_texture_is_always_dark() {
        let tex = Texture::empty();
        assert!(!tex.value_at(0.5, 0.5));
        assert!(!tex.value_at(-5.0, 5.0));
    }

    #[test]
    fn normal_mode_clamps() {
        let mut tex = checkerboard();
        tex.set_clamp_mode(ClampMode::Normal);
        assert!(tex.value_at(-10.0, -10.0));
        assert!(tex.value_at(10.0, 10.0));
    }

    #[test]
    fn tile_mode_wraps_negative_coordinates() {
        let mut tex = checkerboard();
        tex.set_clamp_mode(ClampMode::Tile);
        // -0.25 wraps to 0.75, which is the "on" (1,1) texel.
        assert_eq!(tex.value_at(-0.25, -0.25), tex.value_at(0.75, 0.75));
    }

    #[test]
    fn mirror_mode_flips_on_odd_integer_part() {
        let mut tex = checkerboard();
        tex.set_clamp_mode(ClampMode::Mirror);
        // u=1.25 folds to |1.25|=1.25, int part 1 (odd) -> 1 - 0.25 = 0.75.
        assert_eq!(tex.value_at(1.25, 0.25), tex.value_at(0.75, 0.25));
    }
}
