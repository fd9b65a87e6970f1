pub mod configuration;

pub mod clearing {
    pub mod intersectionfinder;
    pub mod clearingsimulation;
}

pub mod distribution {
    pub mod normaldistribution;
    pub mod gumbeldistribution;
}

pub mod market {
    pub mod marketseries;
}

pub mod math {
    pub mod curve {
        pub mod point;
        pub mod domain;
        pub mod curve;
    }
    pub mod round;
}

pub mod model {
    pub mod modelerror;
    pub mod locationparameter;
}

pub mod sampling {
    pub mod sampler;
}
