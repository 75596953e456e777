use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    /// Plain [0,1] scaling.
    pub const UNIT: Normalization = Normalization {
        mean: [0.0, 0.0, 0.0],
        std: [1.0, 1.0, 1.0],
    };

    pub const IMAGENET: Normalization = Normalization {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub normalization: Normalization,
}

impl ModelConfig {
    pub fn mobilenet_v2(onnx_model_path: PathBuf, labels_path: PathBuf) -> Self {
        Self {
            onnx_model_path,
            labels_path,
            input_shape: (224, 224),
            normalization: Normalization::IMAGENET,
        }
    }
}
