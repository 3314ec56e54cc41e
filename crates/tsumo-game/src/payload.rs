//! Game payloads: mode selector, parameter header and field.
//!
//! ```text
//! mode:varlen(2)
//! header: initial_nuisance_rate  varlen(8)  default 70
//!         margin_time            varlen(9)  default 96, nullable
//!         min_clear_connection   varlen(3)  default 4
//!         nuisance_transform_pt  varlen(8)  default 0
//!         level                  varlen(5)  default 1
//!         columns                varlen(5)  default 6
//!         visible_rows           varlen(5)  default 12
//!         hidden_rows            varlen(2)  default 1
//! field:  prefix tree shape, then one code per cell
//! ```
//!
//! The bytes travel as URL-safe unpadded base64.

use tsumo_codec::header::{read_header, write_header};
use tsumo_codec::{field, transport, BitReader, BitWriter, ParameterSpec};
use tsumo_core::Dimension;

use crate::error::PayloadError;
use crate::game::TsuGame;
use crate::rule::{
    Rule, DEFAULT_INITIAL_NUISANCE_RATE, DEFAULT_LEVEL, DEFAULT_MARGIN_TIME,
    DEFAULT_MIN_CLEAR_CONNECTION, DEFAULT_NUISANCE_TRANSFORM_POINT,
};

/// Partition size of the mode selector.
pub const MODE_PARTITION_BITS: u32 = 2;

/// Largest accepted column or row count.
pub const MAX_DIMENSION: u64 = 255;

/// Game variants a payload can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Classic Tsu.
    Tsu,
}

impl GameMode {
    /// Wire identifier.
    pub const fn id(self) -> u64 {
        match self {
            Self::Tsu => 0,
        }
    }

    /// The mode with wire identifier `id`.
    pub const fn from_id(id: u64) -> Option<Self> {
        match id {
            0 => Some(Self::Tsu),
            _ => None,
        }
    }
}

const fn some(value: u32) -> Option<u64> {
    Some(value as u64)
}

const PARAMETER_NAMES: [&str; 8] = [
    "initial_nuisance_rate",
    "margin_time",
    "min_clear_connection",
    "nuisance_transform_point",
    "level",
    "columns",
    "visible_rows",
    "hidden_rows",
];

/// Header layout for a Tsu payload: rule parameters, then dimension.
pub const TSU_PARAMETERS: [ParameterSpec; 8] = [
    ParameterSpec::new(some(DEFAULT_INITIAL_NUISANCE_RATE), 8),
    ParameterSpec::new(
        match DEFAULT_MARGIN_TIME {
            Some(t) => some(t),
            None => None,
        },
        9,
    ),
    ParameterSpec::new(some(DEFAULT_MIN_CLEAR_CONNECTION), 3),
    ParameterSpec::new(some(DEFAULT_NUISANCE_TRANSFORM_POINT), 8),
    ParameterSpec::new(some(DEFAULT_LEVEL), 5),
    ParameterSpec::new(some(Dimension::DEFAULT_COLUMNS), 5),
    ParameterSpec::new(some(Dimension::DEFAULT_VISIBLE_ROWS), 5),
    ParameterSpec::new(some(Dimension::DEFAULT_HIDDEN_ROWS), 2),
];

/// Encode `game` as a transport string.
///
/// # Errors
///
/// [`PayloadError::ParameterOutOfRange`] when a dimension exceeds
/// [`MAX_DIMENSION`], or any codec error.
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, FieldObject, Position};
/// use tsumo_game::{payload, Rule, TsuGame};
///
/// let mut game = TsuGame::new(Rule::default(), Dimension::default()).unwrap();
/// game.field_mut().set(Position::new(0, 0), FieldObject::Green);
///
/// let text = payload::encode(&game).unwrap();
/// assert_eq!(payload::decode(&text).unwrap(), game);
/// ```
pub fn encode(game: &TsuGame) -> Result<String, PayloadError> {
    let rule = game.rule();
    let dimension = game.field().dimension();
    for (name, value) in [
        ("columns", dimension.columns()),
        ("visible_rows", dimension.visible_rows()),
        ("hidden_rows", dimension.hidden_rows()),
    ] {
        check_dimension(name, u64::from(value))?;
    }

    let values = [
        Some(u64::from(rule.initial_nuisance_rate)),
        rule.margin_time.map(u64::from),
        Some(u64::from(rule.min_clear_connection)),
        Some(u64::from(rule.nuisance_transform_point)),
        Some(u64::from(rule.level)),
        Some(u64::from(dimension.columns())),
        Some(u64::from(dimension.visible_rows())),
        Some(u64::from(dimension.hidden_rows())),
    ];

    let mut writer = BitWriter::new();
    writer.write_varlen(GameMode::Tsu.id(), MODE_PARTITION_BITS)?;
    write_header(&mut writer, &TSU_PARAMETERS, &values)?;
    field::write_field(&mut writer, game.field())?;
    let bits = writer.bit_len();
    let text = writer.finalize();
    tracing::debug!(mode = ?GameMode::Tsu, bits, chars = text.len(), "encoded game");
    Ok(text)
}

/// Decode a transport string produced by [`encode`].
///
/// # Errors
///
/// Any codec error, [`PayloadError::UnknownMode`],
/// [`PayloadError::NullParameter`], [`PayloadError::ParameterOutOfRange`],
/// or a [`PayloadError::Rule`] if the decoded rule is invalid.
pub fn decode(text: &str) -> Result<TsuGame, PayloadError> {
    decode_game(text).inspect_err(|e| tracing::warn!(error = %e, "rejected game payload"))
}

fn decode_game(text: &str) -> Result<TsuGame, PayloadError> {
    let bytes = transport::decode(text)?;
    let mut reader = BitReader::new(&bytes);

    let mode = reader.read_variable_length(MODE_PARTITION_BITS)?;
    match GameMode::from_id(mode) {
        Some(GameMode::Tsu) => {}
        None => return Err(PayloadError::UnknownMode { mode }),
    }

    let values = read_header(&mut reader, &TSU_PARAMETERS)?;
    let param = |i: usize| -> Result<u32, PayloadError> {
        let name = PARAMETER_NAMES[i];
        let value = values[i].ok_or(PayloadError::NullParameter { name })?;
        to_u32(name, value)
    };

    let rule = Rule {
        initial_nuisance_rate: param(0)?,
        margin_time: values[1]
            .map(|t| to_u32(PARAMETER_NAMES[1], t))
            .transpose()?,
        min_clear_connection: param(2)?,
        nuisance_transform_point: param(3)?,
        level: param(4)?,
    };
    rule.validate()?;

    let mut dims = [0u32; 3];
    for (slot, i) in dims.iter_mut().zip(5..8) {
        *slot = param(i)?;
        check_dimension(PARAMETER_NAMES[i], u64::from(*slot))?;
    }
    let dimension = Dimension::new(dims[0], dims[1], dims[2]);

    let field = field::read_field(&mut reader, dimension)?;
    tracing::debug!(?dimension, "decoded game");
    Ok(TsuGame::with_field(rule, field)?)
}

fn to_u32(name: &'static str, value: u64) -> Result<u32, PayloadError> {
    u32::try_from(value).map_err(|_| PayloadError::ParameterOutOfRange {
        name,
        value,
        max: u64::from(u32::MAX),
    })
}

fn check_dimension(name: &'static str, value: u64) -> Result<(), PayloadError> {
    if value > MAX_DIMENSION {
        return Err(PayloadError::ParameterOutOfRange {
            name,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}
