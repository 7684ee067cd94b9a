/// Parser for shape descriptors such as `circle r=3` or `box w=6 h=4 d=2`
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::{all_consuming, map, map_opt},
    multi::many0,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair},
    IResult,
};

use crate::error::{TiltError, TiltResult};
use crate::shape::{Dimension, ShapeKind, ShapeParams};

/// Parse a descriptor, filling unspecified dimensions with defaults
pub fn parse_shape(input: &str) -> TiltResult<(ShapeKind, ShapeParams)> {
    parse_shape_with(input, ShapeParams::default())
}

/// Parse a descriptor on top of existing dimensions
pub fn parse_shape_with(input: &str, base: ShapeParams) -> TiltResult<(ShapeKind, ShapeParams)> {
    let (_, (kind, assignments)) = all_consuming(descriptor)(input)
        .map_err(|e| TiltError::InvalidDescriptor(format!("{:?} in {:?}", e, input)))?;

    let mut params = base;
    for (dimension, value) in assignments {
        params.set(dimension, value)?;
    }
    params.validate_for(kind)?;
    Ok((kind, params))
}

fn descriptor(input: &str) -> IResult<&str, (ShapeKind, Vec<(Dimension, f64)>)> {
    let (input, kind) = preceded(multispace0, shape_kind)(input)?;
    let (input, assignments) = many0(preceded(multispace1, assignment))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (kind, assignments)))
}

fn shape_kind(input: &str) -> IResult<&str, ShapeKind> {
    map_opt(alpha1, ShapeKind::from_name)(input)
}

fn assignment(input: &str) -> IResult<&str, (Dimension, f64)> {
    separated_pair(
        dimension,
        delimited(multispace0, char('='), multispace0),
        double,
    )(input)
}

fn dimension(input: &str) -> IResult<&str, Dimension> {
    // Long names first so `length` is not read as `l` + `ength`
    alt((
        map(alt((tag("length"), tag("l"))), |_| Dimension::Length),
        map(alt((tag("radius"), tag("r"))), |_| Dimension::Radius),
        map(alt((tag("width"), tag("w"))), |_| Dimension::Width),
        map(alt((tag("height"), tag("h"))), |_| Dimension::Height),
        map(alt((tag("depth"), tag("d"))), |_| Dimension::Depth),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_only_uses_defaults() {
        let (kind, params) = parse_shape("circle").unwrap();
        assert_eq!(kind, ShapeKind::Circle);
        assert_eq!(params, ShapeParams::default());
    }

    #[test]
    fn test_short_and_long_keys() {
        let (kind, params) = parse_shape("  box w=6 height = 2.5 d=3 ").unwrap();
        assert_eq!(kind, ShapeKind::Box);
        assert_eq!(params.width, 6.0);
        assert_eq!(params.height, 2.5);
        assert_eq!(params.depth, 3.0);

        let (kind, params) = parse_shape("rect length=9 r=2").unwrap();
        assert_eq!(kind, ShapeKind::Rectangle);
        assert_eq!(params.length, 9.0);
        assert_eq!(params.radius, 2.0);
    }

    #[test]
    fn test_rejects_unknown_text() {
        assert!(matches!(
            parse_shape("sphere r=2"),
            Err(TiltError::InvalidDescriptor(_))
        ));
        assert!(matches!(
            parse_shape("circle r=2 x=4"),
            Err(TiltError::InvalidDescriptor(_))
        ));
        assert!(matches!(parse_shape(""), Err(TiltError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(matches!(
            parse_shape("line l=0"),
            Err(TiltError::InvalidDimension { name: "length", .. })
        ));
        assert!(matches!(
            parse_shape("cone r=-2"),
            Err(TiltError::InvalidDimension { name: "radius", .. })
        ));
    }

    #[test]
    fn test_keeps_base_dimensions() {
        let base = ShapeParams {
            radius: 7.0,
            ..ShapeParams::default()
        };
        let (_, params) = parse_shape_with("cylinder h=2", base).unwrap();
        assert_eq!(params.radius, 7.0);
        assert_eq!(params.height, 2.0);
    }
}
