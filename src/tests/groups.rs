use relic_core::{
    groups::Group, test_rng, CanonicalDeserialize, CanonicalSerialize, UniformRand, Zero,
};
use rand::Rng;

pub fn group_test<G: Group>(a: G, mut b: G) {
    let zero = G::zero();
    let fr_zero = G::ScalarField::from(0u64);
    let fr_one = G::ScalarField::from(1u64);
    let fr_two = G::ScalarField::from(2u64);

    assert_eq!(zero, zero);
    assert_eq!(zero.mul(&fr_one), zero);
    assert_eq!(a.mul(&fr_zero), zero);
    assert_eq!(a.mul(&fr_one), a);
    assert_eq!(a.mul(&fr_two), a.double());

    assert_eq!(a + zero, a);
    assert_eq!(zero + a, a);
    assert_eq!(a - a, zero);
    assert_eq!(a - zero, a);
    assert_eq!(zero - a, -a);

    assert_eq!(a + b, b + a);
    assert_eq!(a + (b + a), (a + a) + b);

    let mut a_plus_b = a;
    a_plus_b += &b;
    assert_eq!(a_plus_b, a + b);
    a_plus_b -= &b;
    assert_eq!(a_plus_b, a);

    b.double_in_place();
    assert_eq!(b, a.mul(&fr_two) + (b - a.double()));

    let mut rng = test_rng();
    let r: G::ScalarField = UniformRand::rand(&mut rng);
    assert_eq!(a.mul(&r) + a.mul(&-r), zero);

    let mut serialized = vec![0u8; a.serialized_size()];
    a.serialize(&mut serialized[..]).unwrap();
    let deserialized = G::deserialize(&serialized[..]).unwrap();
    assert_eq!(a, deserialized);

    let mut uncompressed = vec![0u8; a.uncompressed_size()];
    a.serialize_uncompressed(&mut uncompressed[..]).unwrap();
    let deserialized = G::deserialize_uncompressed(&uncompressed[..]).unwrap();
    assert_eq!(a, deserialized);

    let _: G = rng.gen();
}
