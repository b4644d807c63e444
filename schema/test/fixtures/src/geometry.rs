use wiretype::{
    codec::{validate_record, validate_unboxed, validate_union},
    core::traits::field,
    impl_entity,
    prelude::*,
};

///
/// Offset
///

pub static OFFSET: UnboxedModel =
    UnboxedModel::new("fixtures::Offset", "offset", TypeModel::FLOAT);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Offset(Float64);

impl Offset {
    pub fn new(value: Float64) -> Result<Self, ValidateError> {
        validate_unboxed(&value.to_value(), &OFFSET)?;

        Ok(Self(value))
    }

    /// Offset from a raw float; `None` if it is not finite.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Float64::try_new(value).and_then(|v| Self::new(v).ok())
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0.get()
    }
}

impl Unboxed for Offset {
    type Inner = Float64;

    fn model() -> &'static UnboxedModel {
        &OFFSET
    }

    fn inner(&self) -> &Float64 {
        &self.0
    }

    fn from_inner(inner: Float64) -> Result<Self, ValidateError> {
        Self::new(inner)
    }
}

impl_entity!(unboxed Offset);

///
/// Point
///
/// `left` is carried on the wire as `x`.
///

static POINT_FIELDS: [FieldModel; 2] = [
    FieldModel::new("left", TypeModel::Unboxed(&OFFSET)),
    FieldModel::new("top", TypeModel::Unboxed(&OFFSET)),
];

pub static POINT: RecordModel = RecordModel::new(
    "fixtures::Point",
    "point",
    &POINT_FIELDS,
    NameMap::new(&[("left", "x")]),
);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Point {
    left: Offset,
    top: Offset,
}

impl Point {
    pub fn new(left: Offset, top: Offset) -> Result<Self, ValidateError> {
        let point = Self { left, top };
        validate_record(&point)?;

        Ok(point)
    }

    #[must_use]
    pub const fn left(&self) -> Offset {
        self.left
    }

    #[must_use]
    pub const fn top(&self) -> Offset {
        self.top
    }
}

impl Record for Point {
    fn model() -> &'static RecordModel {
        &POINT
    }

    fn field_values(&self) -> Vec<Value> {
        vec![self.left.to_value(), self.top.to_value()]
    }

    fn from_field_values(values: &[Value]) -> Option<Self> {
        Some(Self {
            left: field(values, 0)?,
            top: field(values, 1)?,
        })
    }
}

impl_entity!(record Point);

///
/// Rectangle
///

static RECTANGLE_FIELDS: [FieldModel; 2] = [
    FieldModel::new("upper_left", TypeModel::Record(&POINT)),
    FieldModel::new("lower_right", TypeModel::Record(&POINT)),
];

pub static RECTANGLE: TagModel = TagModel::new(
    "fixtures::Rectangle",
    "rectangle",
    &RECTANGLE_FIELDS,
    NameMap::identity(),
);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rectangle {
    upper_left: Point,
    lower_right: Point,
}

impl Rectangle {
    pub fn new(upper_left: Point, lower_right: Point) -> Result<Self, ValidateError> {
        let rectangle = Self {
            upper_left,
            lower_right,
        };
        validate_union(&rectangle)?;

        Ok(rectangle)
    }

    #[must_use]
    pub const fn upper_left(&self) -> &Point {
        &self.upper_left
    }

    #[must_use]
    pub const fn lower_right(&self) -> &Point {
        &self.lower_right
    }
}

impl Variant for Rectangle {
    fn union() -> &'static UnionModel {
        &SHAPE
    }

    fn tag() -> &'static TagModel {
        &RECTANGLE
    }

    fn field_values(&self) -> Vec<Value> {
        vec![self.upper_left.to_value(), self.lower_right.to_value()]
    }

    fn from_field_values(values: &[Value]) -> Option<Self> {
        Some(Self {
            upper_left: field(values, 0)?,
            lower_right: field(values, 1)?,
        })
    }
}

///
/// Circle
///

static CIRCLE_FIELDS: [FieldModel; 2] = [
    FieldModel::new("origin", TypeModel::Record(&POINT)),
    FieldModel::new("radius", TypeModel::Unboxed(&OFFSET)),
];

pub static CIRCLE: TagModel = TagModel::new(
    "fixtures::Circle",
    "circle",
    &CIRCLE_FIELDS,
    NameMap::identity(),
);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Circle {
    origin: Point,
    radius: Offset,
}

impl Circle {
    pub fn new(origin: Point, radius: Offset) -> Result<Self, ValidateError> {
        let circle = Self { origin, radius };
        validate_union(&circle)?;

        Ok(circle)
    }

    #[must_use]
    pub const fn origin(&self) -> &Point {
        &self.origin
    }

    #[must_use]
    pub const fn radius(&self) -> Offset {
        self.radius
    }
}

impl Variant for Circle {
    fn union() -> &'static UnionModel {
        &SHAPE
    }

    fn tag() -> &'static TagModel {
        &CIRCLE
    }

    fn field_values(&self) -> Vec<Value> {
        vec![self.origin.to_value(), self.radius.to_value()]
    }

    fn from_field_values(values: &[Value]) -> Option<Self> {
        Some(Self {
            origin: field(values, 0)?,
            radius: field(values, 1)?,
        })
    }
}

impl_entity!(variant Rectangle, Circle);

///
/// Shape
///
/// Abstract: every shape is a rectangle or a circle.
///

static SHAPE_TAGS: [&TagModel; 2] = [&RECTANGLE, &CIRCLE];

pub static SHAPE: UnionModel =
    UnionModel::new("fixtures::Shape", "shape", &SHAPE_TAGS, NameMap::identity());

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Union for Shape {
    fn model() -> &'static UnionModel {
        &SHAPE
    }
}

impl_entity!(union Shape { Rectangle(Rectangle), Circle(Circle) });

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}
