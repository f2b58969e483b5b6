use castable::{convert, Arithmetic, NativeFloat, Number, NumberKind};

macro_rules! assert_self_conversion {
    ($($t:ty => [$($v:expr),+ $(,)?];)+) => {
        $(
            $(
                let v: $t = $v;
                let out: $t = convert(v);
                assert_eq!(out, v, "{} did not convert to itself", stringify!($t));
                assert_eq!(v.into_number().kind(), <$t as Arithmetic>::KIND);
            )+
        )+
    };
}

#[test]
fn every_member_converts_to_itself() {
    assert_self_conversion! {
        i8 => [i8::MIN, -1, 0, i8::MAX];
        i16 => [i16::MIN, -300, i16::MAX];
        i32 => [i32::MIN, 42, i32::MAX];
        i64 => [i64::MIN, -5, i64::MAX];
        isize => [isize::MIN, 7, isize::MAX];
        u8 => [0, 44, u8::MAX];
        u16 => [0, 300, u16::MAX];
        u32 => [0, 0xDEAD_BEEF, u32::MAX];
        u64 => [0, 1 << 40, u64::MAX];
        usize => [0, 4096, usize::MAX];
        f32 => [f32::MIN, -3.9, 0.0, f32::MAX, f32::INFINITY];
        f64 => [f64::MIN_POSITIVE, -3.9, f64::MAX, f64::NEG_INFINITY];
        NativeFloat => [NativeFloat::new(0.5), NativeFloat::new(-1e10)];
    }
}

#[test]
fn every_kind_is_reachable_through_number() {
    let seven = Number::from(7u8);
    let kinds = [
        seven.convert::<i8>().into_number().kind(),
        seven.convert::<i16>().into_number().kind(),
        seven.convert::<i32>().into_number().kind(),
        seven.convert::<i64>().into_number().kind(),
        seven.convert::<isize>().into_number().kind(),
        seven.convert::<u8>().into_number().kind(),
        seven.convert::<u16>().into_number().kind(),
        seven.convert::<u32>().into_number().kind(),
        seven.convert::<u64>().into_number().kind(),
        seven.convert::<usize>().into_number().kind(),
        seven.convert::<f32>().into_number().kind(),
        seven.convert::<f64>().into_number().kind(),
        seven.convert::<NativeFloat>().into_number().kind(),
    ];
    assert_eq!(kinds, NumberKind::ALL);
}

#[test]
fn signed_widening_preserves_value_fuzz() {
    for v in i8::MIN..=i8::MAX {
        assert_eq!(convert::<i8, i16>(v), i16::from(v));
        assert_eq!(convert::<i8, i32>(v), i32::from(v));
        assert_eq!(convert::<i8, i64>(v), i64::from(v));
        assert_eq!(convert::<i8, isize>(v), isize::from(v));
    }

    for v in [i32::MIN, -65_536, -5, 0, 5, 65_536, i32::MAX] {
        assert_eq!(convert::<i32, i64>(v), i64::from(v));
    }
}

#[test]
fn unsigned_widening_preserves_value_fuzz() {
    for v in 0..=u8::MAX {
        assert_eq!(convert::<u8, u16>(v), u16::from(v));
        assert_eq!(convert::<u8, u64>(v), u64::from(v));
        assert_eq!(convert::<u8, usize>(v), usize::from(v));
    }

    for v in [0u32, 1, 0x8000_0000, u32::MAX] {
        assert_eq!(convert::<u32, u64>(v), u64::from(v));
    }
}

#[test]
fn narrowing_truncates_modulo_width() {
    assert_eq!(convert::<i32, u8>(300), 44);
    assert_eq!(convert::<u16, u8>(300), 44);
    assert_eq!(convert::<i64, u8>(-1), 255);
    assert_eq!(convert::<u64, i32>(0x1_0000_0005), 5);
    assert_eq!(convert::<i16, i8>(-129), 127);

    for v in 0u16..2048 {
        assert_eq!(u16::from(convert::<u16, u8>(v)), v % 256);
    }
}

#[test]
fn float_to_integer_truncates_toward_zero() {
    assert_eq!(convert::<f64, i32>(3.9), 3);
    assert_eq!(convert::<f64, i32>(-3.9), -3);
    assert_eq!(convert::<f32, i64>(-0.999), 0);
    assert_eq!(convert::<NativeFloat, i16>(NativeFloat::new(-12.7)), -12);
}

#[test]
fn float_to_integer_saturates() {
    assert_eq!(convert::<f64, u8>(1e9), u8::MAX);
    assert_eq!(convert::<f64, i8>(-1e9), i8::MIN);
    assert_eq!(convert::<f32, u32>(f32::NAN), 0);
}

#[test]
fn integer_to_float_is_exact_in_range() {
    assert_eq!(convert::<i32, f64>(42), 42.0);
    assert_eq!(convert::<i32, f64>(i32::MIN), -2_147_483_648.0);
    assert_eq!(convert::<u32, f32>(1 << 24), 16_777_216.0);
    assert_eq!(convert::<i64, f64>((1 << 53) - 1), 9_007_199_254_740_991.0);
    assert_eq!(convert::<u8, NativeFloat>(200).get(), 200.0);
}

#[test]
fn float_widening_and_narrowing() {
    assert_eq!(convert::<f32, f64>(0.5), 0.5);
    assert_eq!(convert::<f64, f32>(0.1), 0.1f32);
    assert!(convert::<f64, f32>(f64::NAN).is_nan());
    assert_eq!(convert::<f64, f32>(1e300), f32::INFINITY);
}
