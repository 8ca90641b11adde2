use std::sync::{mpsc, Arc};

use asciipix_image::{ArgbImage, ImageSize};
use asciipix_render::pipeline::{convert, ConversionObserver, RenderConfig};
use asciipix_render::RenderError;

struct PrintObserver {
    done: mpsc::Sender<()>,
}

impl ConversionObserver for PrintObserver {
    fn on_original(&self, image: &ArgbImage) {
        println!("original: {}", image.size());
    }

    fn on_grayscale(&self, image: &ArgbImage) {
        println!("greyscaled: {}", image.size());
    }

    fn on_text(&self, text: &str) {
        print!("{text}");
        let _ = self.done.send(());
    }

    fn on_error(&self, error: RenderError) {
        eprintln!("rendering failed: {error}");
        let _ = self.done.send(());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // synthesize a horizontal gradient; decoding real image files is the
    // job of an external image loader
    let size = ImageSize {
        width: 320,
        height: 160,
    };
    let data: Vec<u8> = (0..size.height)
        .flat_map(|_| (0..size.width).flat_map(|x| [255, 0, 0, (x * 255 / size.width) as u8]))
        .collect();
    let image = ArgbImage::new(size, data)?;

    let (done_tx, done_rx) = mpsc::channel();
    let observer = Arc::new(PrintObserver { done: done_tx });

    let handle = convert(image, RenderConfig::default(), observer)?;
    done_rx.recv()?;
    handle.join().expect("rendering thread panicked");

    Ok(())
}
