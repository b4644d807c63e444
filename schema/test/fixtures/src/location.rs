use wiretype::{codec::validate_record, core::traits::field, impl_entity, prelude::*};

///
/// Location
///

static NAME_TYPE: TypeModel = TypeModel::Optional(&TypeModel::TEXT);

static LOCATION_FIELDS: [FieldModel; 3] = [
    FieldModel::new("name", NAME_TYPE),
    FieldModel::new("lat", TypeModel::DECIMAL),
    FieldModel::new("lng", TypeModel::DECIMAL),
];

pub static LOCATION: RecordModel = RecordModel::new(
    "fixtures::Location",
    "location",
    &LOCATION_FIELDS,
    NameMap::identity(),
);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    name: Option<String>,
    lat: Decimal,
    lng: Decimal,
}

impl Location {
    pub fn new(name: Option<String>, lat: Decimal, lng: Decimal) -> Result<Self, ValidateError> {
        let location = Self { name, lat, lng };
        validate_record(&location)?;

        Ok(location)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn lat(&self) -> Decimal {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> Decimal {
        self.lng
    }
}

impl Record for Location {
    fn model() -> &'static RecordModel {
        &LOCATION
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.name.to_value(),
            self.lat.to_value(),
            self.lng.to_value(),
        ]
    }

    fn from_field_values(values: &[Value]) -> Option<Self> {
        Some(Self {
            name: field(values, 0)?,
            lat: field(values, 1)?,
            lng: field(values, 2)?,
        })
    }
}

impl_entity!(record Location);
