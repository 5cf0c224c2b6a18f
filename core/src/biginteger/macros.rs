macro_rules! bigint_impl {
    ($name:ident, $num_limbs:expr) => {
        #[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
        pub struct $name(pub [u64; $num_limbs]);

        impl $name {
            pub const fn new(value: [u64; $num_limbs]) -> Self {
                $name(value)
            }
        }

        impl BigInteger for $name {
            const NUM_LIMBS: usize = $num_limbs;

            #[inline]
            fn add_nocarry(&mut self, other: &Self) -> bool {
                let mut carry = 0;

                for i in 0..$num_limbs {
                    self.0[i] = crate::biginteger::arithmetic::adc(self.0[i], other.0[i], &mut carry);
                }

                carry != 0
            }

            #[inline]
            fn sub_noborrow(&mut self, other: &Self) -> bool {
                let mut borrow = 0;

                for i in 0..$num_limbs {
                    self.0[i] = crate::biginteger::arithmetic::sbb(self.0[i], other.0[i], &mut borrow);
                }

                borrow != 0
            }

            #[inline]
            fn mul2(&mut self) {
                let mut last = 0;
                for i in 0..$num_limbs {
                    let a = &mut self.0[i];
                    let tmp = *a >> 63;
                    *a <<= 1;
                    *a |= last;
                    last = tmp;
                }
            }

            #[inline]
            fn muln(&mut self, mut n: u32) {
                if n as usize >= 64 * $num_limbs {
                    *self = Self::from(0u64);
                    return;
                }

                while n >= 64 {
                    let mut t = 0;
                    for i in 0..$num_limbs {
                        core::mem::swap(&mut t, &mut self.0[i]);
                    }
                    n -= 64;
                }

                if n > 0 {
                    let mut t = 0;
                    for i in 0..$num_limbs {
                        let a = &mut self.0[i];
                        let t2 = *a >> (64 - n);
                        *a <<= n;
                        *a |= t;
                        t = t2;
                    }
                }
            }

            #[inline]
            fn div2(&mut self) {
                let mut t = 0;
                for i in 0..$num_limbs {
                    let a = &mut self.0[$num_limbs - i - 1];
                    let t2 = *a << 63;
                    *a >>= 1;
                    *a |= t;
                    t = t2;
                }
            }

            #[inline]
            fn divn(&mut self, mut n: u32) {
                if n as usize >= 64 * $num_limbs {
                    *self = Self::from(0u64);
                    return;
                }

                while n >= 64 {
                    let mut t = 0;
                    for i in 0..$num_limbs {
                        core::mem::swap(&mut t, &mut self.0[$num_limbs - i - 1]);
                    }
                    n -= 64;
                }

                if n > 0 {
                    let mut t = 0;
                    for i in 0..$num_limbs {
                        let a = &mut self.0[$num_limbs - i - 1];
                        let t2 = *a << (64 - n);
                        *a >>= n;
                        *a |= t;
                        t = t2;
                    }
                }
            }

            #[inline]
            fn is_odd(&self) -> bool {
                self.0[0] & 1 == 1
            }

            #[inline]
            fn is_even(&self) -> bool {
                !self.is_odd()
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.iter().all(|&e| e == 0)
            }

            #[inline]
            fn num_bits(&self) -> u32 {
                let mut ret = $num_limbs * 64;
                for i in self.0.iter().rev() {
                    let leading = i.leading_zeros();
                    ret -= leading;
                    if leading != 64 {
                        break;
                    }
                }

                ret
            }

            #[inline]
            fn get_bit(&self, i: usize) -> bool {
                if i >= 64 * $num_limbs {
                    false
                } else {
                    let limb = i / 64;
                    let bit = i - (64 * limb);
                    (self.0[limb] & (1 << bit)) != 0
                }
            }

            #[inline]
            fn from_bits(bits: &[bool]) -> Self {
                let mut res = Self::default();
                let num_bits = core::cmp::min(bits.len(), 64 * $num_limbs);
                for i in 0..num_bits {
                    let bit = bits[bits.len() - 1 - i];
                    if bit {
                        res.0[i / 64] |= 1 << (i % 64);
                    }
                }

                res
            }

            #[inline]
            fn to_bits(&self) -> Vec<bool> {
                let mut res = vec![false; 64 * $num_limbs];
                for (i, bit) in res.iter_mut().rev().enumerate() {
                    *bit = self.get_bit(i);
                }

                let mut first_one = 0;
                while first_one < res.len() && !res[first_one] {
                    first_one += 1;
                }
                res[first_one..].to_vec()
            }

            #[inline]
            fn find_wnaf(&self) -> Vec<i64> {
                crate::biginteger::arithmetic::find_wnaf(&self.0)
            }
        }

        impl AsMut<[u64]> for $name {
            #[inline]
            fn as_mut(&mut self) -> &mut [u64] {
                &mut self.0
            }
        }

        impl AsRef<[u64]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u64] {
                &self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(val: u64) -> $name {
                let mut repr = Self::default();
                repr.0[0] = val;
                repr
            }
        }

        impl core::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(());
                }

                if s == "0" {
                    return Ok(Self::from(0u64));
                }

                let mut res = Self::from(0u64);

                let ten = Self::from(10u64);

                let mut first_digit = true;

                for c in s.chars() {
                    match c.to_digit(10) {
                        Some(c) => {
                            if first_digit {
                                if c == 0 {
                                    return Err(());
                                }

                                first_digit = false;
                            }

                            res.mul_assign_limbs(&ten);
                            let carry = res.add_nocarry(&Self::from(u64::from(c)));

                            if carry {
                                return Err(());
                            }
                        }
                        None => {
                            return Err(());
                        }
                    }
                }

                Ok(res)
            }
        }

        impl $name {
            #[inline]
            fn mul_assign_limbs(&mut self, other: &Self) {
                let mut r = [0u64; $num_limbs];
                for i in 0..$num_limbs {
                    let mut carry = 0;
                    for j in 0..$num_limbs {
                        if i + j < $num_limbs {
                            r[i + j] = crate::biginteger::arithmetic::mac_with_carry(
                                r[i + j],
                                self.0[i],
                                other.0[j],
                                &mut carry,
                            );
                        }
                    }
                }
                self.0 = r;
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for i in self.0.iter().rev() {
                    write!(f, "{:016X}", *i)?;
                }
                Ok(())
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "0x")?;
                for i in self.0.iter().rev() {
                    write!(f, "{:016X}", *i)?;
                }
                Ok(())
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
                    if a < b {
                        return core::cmp::Ordering::Less;
                    } else if a > b {
                        return core::cmp::Ordering::Greater;
                    }
                }

                core::cmp::Ordering::Equal
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Distribution<$name> for Standard {
            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $name {
                $name(rng.gen())
            }
        }

        impl ToBytes for $name {
            #[inline]
            fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
                for limb in self.0.iter() {
                    limb.write(&mut writer)?;
                }
                Ok(())
            }
        }

        impl FromBytes for $name {
            #[inline]
            fn read<R: Read>(mut reader: R) -> IoResult<Self> {
                let mut repr = [0u64; $num_limbs];
                for limb in repr.iter_mut() {
                    *limb = u64::read(&mut reader)?;
                }
                Ok($name(repr))
            }
        }
    };
}
