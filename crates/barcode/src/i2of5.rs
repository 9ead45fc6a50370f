use crate::error::EncodeError;
use crate::symbol::{BarcodeSymbol, Module, ModuleKind, ModuleWidth};

/// Number of digits in a boleto barcode.
pub const BOLETO_DIGITS: usize = 44;

/// Wide-to-narrow module ratio used on boletos.
pub const WIDE_RATIO: f64 = 3.0;

const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Symbol length mandated by Febraban, in points (103 mm).
pub const FEBRABAN_LENGTH: f64 = 103.0 * POINTS_PER_MM;

/// Bar height used on boletos, in points (13 mm).
pub const FEBRABAN_HEIGHT: f64 = 13.0 * POINTS_PER_MM;

use ModuleWidth::{Narrow as N, Wide as W};

/// Wide/narrow pattern per decimal digit: two wide and three narrow elements.
const DIGIT_PATTERNS: [[ModuleWidth; 5]; 10] = [
    [N, N, W, W, N],
    [W, N, N, N, W],
    [N, W, N, N, W],
    [W, W, N, N, N],
    [N, N, W, N, W],
    [W, N, W, N, N],
    [N, W, W, N, N],
    [N, N, N, W, W],
    [W, N, N, W, N],
    [N, W, N, W, N],
];

const START_PATTERN: [(ModuleKind, ModuleWidth); 4] = [
    (ModuleKind::Bar, N),
    (ModuleKind::Space, N),
    (ModuleKind::Bar, N),
    (ModuleKind::Space, N),
];

const STOP_PATTERN: [(ModuleKind, ModuleWidth); 3] = [
    (ModuleKind::Bar, W),
    (ModuleKind::Space, N),
    (ModuleKind::Bar, N),
];

/// Interleaved 2 of 5 encoder.
///
/// Boleto barcodes carry their own check digit inside the 44 digits, so no
/// symbology checksum is added. Start/stop guards are off unless requested.
#[derive(Debug, Clone, Copy)]
pub struct Interleaved2of5 {
    ratio: f64,
    guards: bool,
}

impl Default for Interleaved2of5 {
    fn default() -> Self {
        Self {
            ratio: WIDE_RATIO,
            guards: false,
        }
    }
}

impl Interleaved2of5 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the start and stop patterns around the data modules.
    pub fn with_guards(mut self, guards: bool) -> Self {
        self.guards = guards;
        self
    }

    fn units(&self, class: ModuleWidth) -> f64 {
        match class {
            ModuleWidth::Narrow => 1.0,
            ModuleWidth::Wide => self.ratio,
        }
    }

    /// Total width of a symbol, counted in narrow-module units.
    ///
    /// Every digit pattern has the same composition, but the sum is taken over
    /// the table so the count follows the actual patterns in use.
    fn narrow_units(&self, digits: &[u8]) -> f64 {
        let data: f64 = digits
            .iter()
            .flat_map(|&d| DIGIT_PATTERNS[d as usize].iter())
            .map(|&class| self.units(class))
            .sum();
        if !self.guards {
            return data;
        }
        let guards: f64 = START_PATTERN
            .iter()
            .chain(STOP_PATTERN.iter())
            .map(|&(_, class)| self.units(class))
            .sum();
        data + guards
    }

    /// Encodes a 44-digit boleto line into a symbol exactly `target_length` wide.
    pub fn encode(
        &self,
        digits: &str,
        target_length: f64,
        target_height: f64,
    ) -> Result<BarcodeSymbol, EncodeError> {
        let values = parse_digits(digits)?;

        let narrow = target_length / self.narrow_units(&values);
        log::trace!(
            "Encoding {} digits: narrow module {:.6}, ratio {}",
            values.len(),
            narrow,
            self.ratio
        );

        let mut modules = Vec::with_capacity(values.len() * 5 + 7);
        let mut push = |kind: ModuleKind, class: ModuleWidth| {
            modules.push(Module {
                kind,
                class,
                width: narrow * self.units(class),
            });
        };

        if self.guards {
            for (kind, class) in START_PATTERN {
                push(kind, class);
            }
        }
        for pair in values.chunks_exact(2) {
            let bars = &DIGIT_PATTERNS[pair[0] as usize];
            let spaces = &DIGIT_PATTERNS[pair[1] as usize];
            for (&bar, &space) in bars.iter().zip(spaces.iter()) {
                push(ModuleKind::Bar, bar);
                push(ModuleKind::Space, space);
            }
        }
        if self.guards {
            for (kind, class) in STOP_PATTERN {
                push(kind, class);
            }
        }

        Ok(BarcodeSymbol::new(modules, narrow, target_height))
    }
}

fn parse_digits(digits: &str) -> Result<Vec<u8>, EncodeError> {
    let found = digits.chars().count();
    if found != BOLETO_DIGITS {
        return Err(EncodeError::InvalidLength {
            expected: BOLETO_DIGITS,
            found,
        });
    }
    digits
        .chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(EncodeError::InvalidCharacter {
                    position,
                    character,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "00191962900000150000000001234567800000001718";

    fn encode(digits: &str) -> Result<BarcodeSymbol, EncodeError> {
        Interleaved2of5::new().encode(digits, FEBRABAN_LENGTH, FEBRABAN_HEIGHT)
    }

    #[test]
    fn test_total_width_matches_target() {
        let symbol = encode(LINE).unwrap();
        assert!((symbol.total_width() - FEBRABAN_LENGTH).abs() < 1e-6);
        assert_eq!(symbol.height(), FEBRABAN_HEIGHT);
    }

    #[test]
    fn test_total_width_matches_any_target() {
        for target in [10.0, 291.968_503_937, 1234.5678] {
            let symbol = Interleaved2of5::new().encode(LINE, target, 5.0).unwrap();
            assert!((symbol.total_width() - target).abs() < 1e-6, "target {target}");
        }
    }

    #[test]
    fn test_narrow_width_is_closed_form() {
        // 44 digits x (2 wide x 3 + 3 narrow) = 396 narrow units.
        let symbol = encode(LINE).unwrap();
        assert!((symbol.narrow_width() - FEBRABAN_LENGTH / 396.0).abs() < 1e-12);
        assert_eq!(symbol.modules().len(), 440);
    }

    #[test]
    fn test_pair_interleaves_bars_and_spaces() {
        let line = format!("38{}", "0".repeat(42));
        let symbol = encode(&line).unwrap();
        let first: Vec<_> = symbol.modules()[..10]
            .iter()
            .map(|m| (m.kind, m.class))
            .collect();
        // '3' = WWNNN on the bars, '8' = WNNWN on the spaces.
        assert_eq!(
            first,
            vec![
                (ModuleKind::Bar, W),
                (ModuleKind::Space, W),
                (ModuleKind::Bar, W),
                (ModuleKind::Space, N),
                (ModuleKind::Bar, N),
                (ModuleKind::Space, N),
                (ModuleKind::Bar, N),
                (ModuleKind::Space, W),
                (ModuleKind::Bar, N),
                (ModuleKind::Space, N),
            ]
        );
    }

    #[test]
    fn test_every_digit_pattern_has_two_wide_elements() {
        for pattern in DIGIT_PATTERNS {
            assert_eq!(pattern.iter().filter(|&&c| c == W).count(), 2);
        }
    }

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(encode(LINE).unwrap(), encode(LINE).unwrap());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            encode(&LINE[..43]),
            Err(EncodeError::InvalidLength {
                expected: 44,
                found: 43
            })
        );
        assert_eq!(
            encode(&format!("{LINE}1")),
            Err(EncodeError::InvalidLength {
                expected: 44,
                found: 45
            })
        );
    }

    #[test]
    fn test_rejects_non_digit() {
        let line = format!("{}A{}", &LINE[..10], &LINE[11..]);
        assert_eq!(
            encode(&line),
            Err(EncodeError::InvalidCharacter {
                position: 10,
                character: 'A'
            })
        );
    }

    #[test]
    fn test_guards_are_calibrated_too() {
        let symbol = Interleaved2of5::new()
            .with_guards(true)
            .encode(LINE, FEBRABAN_LENGTH, FEBRABAN_HEIGHT)
            .unwrap();
        assert_eq!(symbol.modules().len(), 447);
        assert_eq!(symbol.modules()[0].kind, ModuleKind::Bar);
        assert_eq!(symbol.modules()[446].kind, ModuleKind::Bar);
        assert!((symbol.total_width() - FEBRABAN_LENGTH).abs() < 1e-6);
        // 396 data units + 4 start + 5 stop.
        assert!((symbol.narrow_width() - FEBRABAN_LENGTH / 405.0).abs() < 1e-12);
    }

    #[test]
    fn test_bar_offsets_are_cumulative() {
        let symbol = encode(LINE).unwrap();
        let bars: Vec<_> = symbol.bars().collect();
        assert_eq!(bars.len(), 220);
        assert_eq!(bars[0].0, 0.0);
        let first = &symbol.modules()[..2];
        assert!((bars[1].0 - (first[0].width + first[1].width)).abs() < 1e-12);
    }
}
