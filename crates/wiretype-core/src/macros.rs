// impl_entity
/// Implement [`FieldValue`](crate::traits::FieldValue) and
/// [`Entity`](crate::traits::Entity) for generated types that already
/// implement `Unboxed`, `Record`, `Variant`, `Union`, or `EnumKind`.
///
/// A variant converts to an instance of its union, so it can be written
/// and read on its own.
///
/// ```ignore
/// impl_entity!(unboxed Offset, Token);
/// impl_entity!(record Point, Location);
/// impl_entity!(variant Rectangle, Circle);
/// impl_entity!(union Shape { Rectangle(Rectangle), Circle(Circle) });
/// impl_entity!(enum Color);
/// ```
#[macro_export]
macro_rules! impl_entity {
    (unboxed $( $type:ty ),+ $(,)?) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::traits::unboxed_to_value(self)
                }

                fn from_value(value: &$crate::value::Value) -> Option<Self> {
                    $crate::traits::unboxed_from_value(value)
                }
            }

            impl $crate::traits::Entity for $type {
                fn type_model() -> $crate::model::TypeModel {
                    $crate::model::TypeModel::Unboxed(
                        <$type as $crate::traits::Unboxed>::model(),
                    )
                }
            }
        )+
    };

    (record $( $type:ty ),+ $(,)?) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::traits::record_to_value(self)
                }

                fn from_value(value: &$crate::value::Value) -> Option<Self> {
                    $crate::traits::record_from_value(value)
                }
            }

            impl $crate::traits::Entity for $type {
                fn type_model() -> $crate::model::TypeModel {
                    $crate::model::TypeModel::Record(
                        <$type as $crate::traits::Record>::model(),
                    )
                }
            }
        )+
    };

    (variant $( $type:ty ),+ $(,)?) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::traits::variant_to_value(self)
                }

                fn from_value(value: &$crate::value::Value) -> Option<Self> {
                    $crate::traits::variant_from_value(value)
                }
            }

            impl $crate::traits::Entity for $type {
                fn type_model() -> $crate::model::TypeModel {
                    $crate::model::TypeModel::Union(
                        <$type as $crate::traits::Variant>::union(),
                    )
                }
            }
        )+
    };

    (union $type:ty { $( $arm:ident ( $variant:ty ) ),+ $(,)? }) => {
        impl $crate::traits::FieldValue for $type {
            fn to_value(&self) -> $crate::value::Value {
                match self {
                    $( Self::$arm(v) => $crate::traits::variant_to_value(v), )+
                }
            }

            fn from_value(value: &$crate::value::Value) -> Option<Self> {
                $(
                    if let Some(v) = $crate::traits::variant_from_value::<$variant>(value) {
                        return Some(Self::$arm(v));
                    }
                )+

                None
            }
        }

        impl $crate::traits::Entity for $type {
            fn type_model() -> $crate::model::TypeModel {
                $crate::model::TypeModel::Union(<$type as $crate::traits::Union>::model())
            }
        }
    };

    (enum $( $type:ty ),+ $(,)?) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::traits::enum_to_value(self)
                }

                fn from_value(value: &$crate::value::Value) -> Option<Self> {
                    $crate::traits::enum_from_value(value)
                }
            }

            impl $crate::traits::Entity for $type {
                fn type_model() -> $crate::model::TypeModel {
                    $crate::model::TypeModel::Enum(
                        <$type as $crate::traits::EnumKind>::model(),
                    )
                }
            }
        )+
    };
}
